use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_vietnamese_diacritics() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("Trà Sữa"), "tra-sua");
        assert_eq!(generator.slugify("  Bánh  Mì!! "), "banh-mi");
    }
}
