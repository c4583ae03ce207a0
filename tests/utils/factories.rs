/// Test data factories using builder pattern
///
/// Provides convenient methods to create inputs with random but valid data
use catalog_lib::modules::category::{
    domain::entities::{DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH},
    CreateCategoryInput,
};
use rand::Rng;

const WORDS: &[&str] = &[
    "action", "drama", "comedy", "horror", "mystery", "romance", "thriller", "western",
    "animation", "documentary", "fantasy", "musical",
];

fn random_words(min_chars: usize, max_chars: usize) -> String {
    let mut rng = rand::thread_rng();
    let target = rng.gen_range(min_chars..=max_chars);
    let mut text = String::new();

    while text.chars().count() < target {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
    }

    text.chars().take(target).collect::<String>().trim_end().to_string()
}

pub struct CategoryInputFactory {
    name: String,
    description: Option<String>,
    is_active: bool,
}

impl Default for CategoryInputFactory {
    fn default() -> Self {
        Self {
            name: valid_category_name(),
            description: Some(valid_category_description()),
            is_active: rand::random::<bool>(),
        }
    }
}

impl CategoryInputFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn build(self) -> CreateCategoryInput {
        let mut input = CreateCategoryInput::new(self.name).with_is_active(self.is_active);
        input.description = self.description;
        input
    }
}

pub fn valid_category_name() -> String {
    let mut name = random_words(NAME_MIN_LENGTH, NAME_MAX_LENGTH.min(40));
    while name.chars().count() < NAME_MIN_LENGTH {
        name.push('s');
    }
    name
}

pub fn valid_category_description() -> String {
    random_words(0, DESCRIPTION_MAX_LENGTH.min(500))
}

pub fn too_long_name() -> String {
    let mut name = valid_category_name();
    while name.chars().count() <= NAME_MAX_LENGTH {
        name = format!("{} {}", name, valid_category_name());
    }
    name
}

pub fn too_long_description() -> String {
    let mut description = valid_category_description();
    while description.chars().count() <= DESCRIPTION_MAX_LENGTH {
        description = format!("{} {}", description, random_words(100, 500));
    }
    description
}
