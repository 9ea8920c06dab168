mod join_lottery;
mod randomness;
