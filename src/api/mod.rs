pub mod gdp;
