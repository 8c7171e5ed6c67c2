//! Fixed JSON output schema for the recipe response.
//!
//! Mirrors the recipe data model in `types`: an array of recipe objects with
//! nested arrays for ingredients, steps, and sauce ingredients, and the heat
//! level constrained to the four stove labels.

use serde_json::{json, Value as JsonValue};

/// Schema constraining the model's structured output to a recipe array.
pub fn recipe_response_schema() -> JsonValue {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "description": { "type": "STRING" },
                "cuisine": { "type": "STRING" },
                "difficulty": { "type": "NUMBER" },
                "prepTimeMinutes": { "type": "NUMBER" },
                "cookTimeMinutes": { "type": "NUMBER" },
                "totalTimeMinutes": { "type": "NUMBER" },
                "calories": { "type": "NUMBER" },
                "ingredients": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "shape": { "type": "STRING" },
                            "texture": { "type": "STRING" },
                            "amount": { "type": "STRING" },
                            "colorHex": { "type": "STRING" }
                        }
                    }
                },
                "sauce": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "ingredients": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "amount": { "type": "STRING" }
                                }
                            }
                        },
                        "mixInstruction": { "type": "STRING" }
                    }
                },
                "tasteProfile": {
                    "type": "OBJECT",
                    "properties": {
                        "salty": { "type": "NUMBER" },
                        "acidic": { "type": "NUMBER" },
                        "sweet": { "type": "NUMBER" },
                        "spicy": { "type": "NUMBER" },
                        "bitter": { "type": "NUMBER" }
                    }
                },
                "cookingMethods": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "steps": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "stepNumber": { "type": "NUMBER" },
                            "instruction": { "type": "STRING" },
                            "successTip": { "type": "STRING" },
                            "durationSeconds": { "type": "NUMBER" },
                            "heatLevel": {
                                "type": "STRING",
                                "enum": ["大火", "中火", "小火", "關火"]
                            }
                        }
                    }
                }
            }
        }
    })
}
