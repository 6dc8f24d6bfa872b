pub mod black_scholes;
pub mod option_type;

pub use black_scholes::BlackScholesModel;
pub use option_type::OptionType;
