//! Dish-image prompt: fixed photographic-style template embedding the dish name.

/// Render the image-generation prompt for a dish.
pub fn render_dish_image_prompt(dish_name: &str) -> String {
    format!(
        "A high-quality, professional food photography shot of {dish_name}. \
         Delicious, appetizing, 4k resolution, studio lighting, beautiful plating. \
         Close up. Food magazine style."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_dish_name() {
        let prompt = render_dish_image_prompt("黃金脆皮煎餃");
        assert!(prompt.contains("黃金脆皮煎餃"));
        assert!(prompt.contains("food photography"));
    }
}
