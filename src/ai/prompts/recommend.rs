//! Recommendation prompt: fixed system instruction plus a user prompt
//! composed from the preference fields in a fixed clause order.

use crate::types::UserPreferences;

/// System instruction sent with every recommendation request.
pub const RECOMMEND_SYSTEM_INSTRUCTION: &str = r#"
You are the AI engine for a premium guided-cooking app.
Your goal is to generate structured recipe data.
Always respond in TRADITIONAL CHINESE (Taiwan).

Rules:
1. Steps must be detailed and descriptive (40-80 chars) to guide beginners clearly.
2. Include specific visual "success tips" (e.g., color changes, smell, texture).
3. Ingredients should include colorHex (approximate color of the ingredient).
4. Strictly follow the requested JSON schema.
5. If the user gives a time limit, ensure totalTimeMinutes respects it.
6. MANDATORY: Provide a dedicated 'sauce' section with ingredients and mixing instructions whenever the dish supports one. The sauce is the soul of the dish.
7. CRITICAL: If the user provides specific ingredients, the recipes MUST feature them as the main ingredient. Do not ignore user input.
"#;

/// Compose the user prompt. Clause order is fixed: base request,
/// ingredients-on-hand, time limit, cuisine preference, mood. Clauses whose
/// preference field is absent or empty are omitted.
pub fn render_recommend_prompt(prefs: &UserPreferences) -> String {
    let mut prompt =
        String::from("請推薦 3 道適合新手的美味料理，請特別注重醬汁的調配與細節。");

    if let Some(ingredients) = prefs
        .ingredients_on_hand
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        prompt.push_str(&format!(
            " 使用者指定冰箱現有食材: \"{ingredients}\"。請務必在推薦的食譜中包含這些食材，並以此為核心設計菜單。"
        ));
    }

    if let Some(limit) = prefs.time_limit {
        prompt.push_str(&format!(" 烹飪時間限制: {limit} 分鐘。"));
    }

    if !prefs.desired_cuisine.is_empty() {
        // De-duplicate while preserving the caller's order.
        let mut seen = Vec::new();
        for cuisine in &prefs.desired_cuisine {
            if !seen.contains(cuisine) {
                seen.push(*cuisine);
            }
        }
        let labels: Vec<&str> = seen.iter().map(|c| c.as_str()).collect();
        prompt.push_str(&format!(" 使用者想吃的料理類型: {}。", labels.join(" 或 ")));
    }

    if let Some(mood) = prefs.mood.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str(&format!(" 使用者當前心情: {mood}，請推薦符合此心境的菜餚。"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CuisineType;

    #[test]
    fn empty_preferences_yield_only_the_base_request() {
        let prompt = render_recommend_prompt(&UserPreferences::default());
        assert!(prompt.starts_with("請推薦 3 道"));
        assert!(!prompt.contains("食材"));
        assert!(!prompt.contains("分鐘"));
        assert!(!prompt.contains("料理類型"));
        assert!(!prompt.contains("心情"));
    }

    #[test]
    fn clauses_appear_in_fixed_order() {
        let prefs = UserPreferences {
            time_limit: Some(30),
            ingredients_on_hand: Some("雞蛋,洋蔥".to_string()),
            mood: Some("想慶祝".to_string()),
            desired_cuisine: vec![CuisineType::Japanese],
        };

        let prompt = render_recommend_prompt(&prefs);
        let ingredients_at = prompt.find("雞蛋,洋蔥").unwrap();
        let time_at = prompt.find("30 分鐘").unwrap();
        let cuisine_at = prompt.find("日式").unwrap();
        let mood_at = prompt.find("想慶祝").unwrap();
        assert!(ingredients_at < time_at);
        assert!(time_at < cuisine_at);
        assert!(cuisine_at < mood_at);
    }

    #[test]
    fn blank_fields_are_omitted() {
        let prefs = UserPreferences {
            time_limit: None,
            ingredients_on_hand: Some("   ".to_string()),
            mood: Some(String::new()),
            desired_cuisine: vec![],
        };

        let prompt = render_recommend_prompt(&prefs);
        assert!(!prompt.contains("食材"));
        assert!(!prompt.contains("心情"));
    }

    #[test]
    fn cuisines_are_deduplicated_preserving_order() {
        let prefs = UserPreferences {
            desired_cuisine: vec![
                CuisineType::Korean,
                CuisineType::Taiwanese,
                CuisineType::Korean,
            ],
            ..Default::default()
        };

        let prompt = render_recommend_prompt(&prefs);
        assert!(prompt.contains("韓式 或 台式"));
        assert_eq!(prompt.matches("韓式").count(), 1);
    }

    #[test]
    fn system_instruction_demands_schema_and_locale() {
        assert!(RECOMMEND_SYSTEM_INSTRUCTION.contains("TRADITIONAL CHINESE"));
        assert!(RECOMMEND_SYSTEM_INSTRUCTION.contains("JSON schema"));
        assert!(RECOMMEND_SYSTEM_INSTRUCTION.contains("40-80"));
        assert!(RECOMMEND_SYSTEM_INSTRUCTION.contains("sauce"));
    }
}
