pub mod category;

pub use category::{
    Category, NewCategory, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
