//! Shared recipe data model.
//!
//! These are the wire types exchanged with the generative model and consumed
//! by the results list and the cooking-mode session. Field names serialize in
//! camelCase to match the response schema sent to the model; enum values are
//! the Traditional Chinese labels the product displays.

use serde::{Deserialize, Serialize};

/// Cuisine categories offered in the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CuisineType {
    #[serde(rename = "台式")]
    Taiwanese,
    #[serde(rename = "西式")]
    Western,
    #[serde(rename = "日式")]
    Japanese,
    #[serde(rename = "韓式")]
    Korean,
    #[serde(rename = "東南亞")]
    SoutheastAsian,
    #[serde(rename = "甜點")]
    Dessert,
}

impl CuisineType {
    pub const ALL: &'static [CuisineType] = &[
        CuisineType::Taiwanese,
        CuisineType::Western,
        CuisineType::Japanese,
        CuisineType::Korean,
        CuisineType::SoutheastAsian,
        CuisineType::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Taiwanese => "台式",
            CuisineType::Western => "西式",
            CuisineType::Japanese => "日式",
            CuisineType::Korean => "韓式",
            CuisineType::SoutheastAsian => "東南亞",
            CuisineType::Dessert => "甜點",
        }
    }
}

/// Cooking-method tags attached to a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookingMethod {
    #[serde(rename = "炸")]
    Fry,
    #[serde(rename = "煎")]
    PanFry,
    #[serde(rename = "蒸")]
    Steam,
    #[serde(rename = "煮")]
    Boil,
    #[serde(rename = "烤")]
    Roast,
    #[serde(rename = "炒")]
    StirFry,
}

/// Stove-intensity tag for a cooking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatLevel {
    #[serde(rename = "大火")]
    High,
    #[serde(rename = "中火")]
    Medium,
    #[serde(rename = "小火")]
    Low,
    #[serde(rename = "關火")]
    Off,
}

impl HeatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatLevel::High => "大火",
            HeatLevel::Medium => "中火",
            HeatLevel::Low => "小火",
            HeatLevel::Off => "關火",
        }
    }
}

/// Five bounded taste axes, each in [0,5]. Display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasteProfile {
    pub salty: u8,
    pub acidic: u8,
    pub sweet: u8,
    pub spicy: u8,
    pub bitter: u8,
}

impl TasteProfile {
    /// Clamp every axis into the displayable [0,5] range.
    pub fn clamp_axes(&mut self) {
        self.salty = self.salty.min(5);
        self.acidic = self.acidic.min(5);
        self.sweet = self.sweet.min(5);
        self.spicy = self.spicy.min(5);
        self.bitter = self.bitter.min(5);
    }
}

/// An ingredient entry with its display descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// e.g. 切丁, 切片
    pub shape: String,
    /// e.g. 生, 酥脆
    pub texture: String,
    /// Quantity as display text, e.g. "200g"
    pub amount: String,
    /// Approximate display color of the ingredient.
    pub color_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SauceIngredient {
    pub name: String,
    pub amount: String,
}

/// Optional sauce sub-component with its own ratios and mixing instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sauce {
    pub name: String,
    pub ingredients: Vec<SauceIngredient>,
    pub mix_instruction: String,
}

/// A single guided-cooking step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingStep {
    /// 1-based, contiguous after normalization.
    pub step_number: u32,
    pub instruction: String,
    /// Visually observable indicator that the step worked.
    pub success_tip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_level: Option<HeatLevel>,
}

/// A structured dish description consumed by the results list and the
/// cooking-mode session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique within a page session. Assigned by the recommendation service;
    /// the model's own value, if any, is discarded.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub cuisine: CuisineType,
    /// 1-5.
    pub difficulty: u8,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub total_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sauce: Option<Sauce>,
    pub taste_profile: TasteProfile,
    pub cooking_methods: Vec<CookingMethod>,
    pub steps: Vec<CookingStep>,
    /// Generated dish image as a data URI, attached by image enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Repair model output into a self-consistent recipe: difficulty and
    /// taste axes clamped, total time reconciled with prep + cook, steps
    /// renumbered to match their sequence position.
    pub fn normalize(&mut self) {
        self.difficulty = self.difficulty.clamp(1, 5);
        self.taste_profile.clamp_axes();
        self.total_time_minutes = self
            .prep_time_minutes
            .saturating_add(self.cook_time_minutes);
        for (idx, step) in self.steps.iter_mut().enumerate() {
            step.step_number = idx as u32 + 1;
        }
    }
}

/// Loose preferences gathered on the search screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Upper bound on `total_time_minutes`, in minutes.
    pub time_limit: Option<u32>,
    /// Free text, e.g. "雞蛋、洋蔥".
    pub ingredients_on_hand: Option<String>,
    /// Free text, e.g. "想慶祝".
    pub mood: Option<String>,
    pub desired_cuisine: Vec<CuisineType>,
}
