pub mod error;
pub mod packet;
pub mod parser;
pub mod part1;
pub mod part2;
