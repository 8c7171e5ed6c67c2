//! Prompt templates for the generative model.

pub mod dish_image;
pub mod recommend;

pub use dish_image::render_dish_image_prompt;
pub use recommend::{render_recommend_prompt, RECOMMEND_SYSTEM_INSTRUCTION};
