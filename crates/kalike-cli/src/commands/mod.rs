pub mod list;
pub mod run;
pub mod scores;
pub mod speak;
