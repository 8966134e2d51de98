pub mod chart;
pub mod panels;
pub mod sections;
pub mod table;
