pub const DEFAULT_DECK_SIZE: usize = 20;
pub const DEFAULT_IMAGE_TEMPLATE: &str = "https://cataas.com/cat?{id}&width=400&height=500";
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub image_url: String,
    pub liked: bool,
}

impl Card {
    pub fn title(&self) -> String {
        format!("Cat #{}", self.id + 1)
    }
}

// The id is baked into each URL so no two cards share a cached image.
pub fn generate_deck(count: usize, template: &str) -> Vec<Card> {
    (0..count)
        .map(|id| Card {
            id,
            image_url: image_url(template, id),
            liked: false,
        })
        .collect()
}

pub fn image_url(template: &str, id: usize) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}
