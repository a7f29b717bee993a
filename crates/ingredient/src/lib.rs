pub mod aisle;
pub mod parser;
pub mod quantity;

pub use aisle::{Aisle, categorize};
pub use parser::{ParsedIngredient, parse_ingredient};
pub use quantity::{
    QuantityParseError, format_quantity, fraction_to_f64, is_ambiguous_quantity, parse_quantity,
    round_to_practical_value,
};
