pub mod basis;
pub mod curve;
pub mod point;
pub mod three_isogeny_chain;
pub mod two_isogeny_chain;
pub mod x_only_arithmetic;
