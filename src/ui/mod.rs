pub mod charts;
pub mod competitions;
pub mod medals;
pub mod panels;
pub mod table;
pub mod widgets;
