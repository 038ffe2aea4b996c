mod cell;
mod updated;
