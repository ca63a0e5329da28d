pub mod games;
pub mod interface;
pub mod scores;
pub mod submissions;
