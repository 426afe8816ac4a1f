pub mod charts;
pub mod filtered;
pub mod individual;
pub mod overview;
pub mod panels;
pub mod tables;
