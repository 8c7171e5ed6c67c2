//! Static demo dataset.
//!
//! Two fully-formed showcase recipes with no network dependency. They seed
//! the home screen and replace live results whenever the recommendation path
//! fails (demo mode).

use crate::types::{
    CookingMethod, CookingStep, CuisineType, HeatLevel, Ingredient, Recipe, Sauce,
    SauceIngredient, TasteProfile,
};

/// Build the embedded demo recipes.
pub fn demo_recipes() -> Vec<Recipe> {
    vec![pan_fried_dumplings(), teriyaki_chicken()]
}

fn pan_fried_dumplings() -> Recipe {
    Recipe {
        id: "demo-1".to_string(),
        name: "黃金脆皮煎餃".to_string(),
        description: "經典台式風味，底部焦脆，內餡多汁。適合新手的成就感料理。".to_string(),
        cuisine: CuisineType::Taiwanese,
        difficulty: 2,
        prep_time_minutes: 15,
        cook_time_minutes: 10,
        total_time_minutes: 25,
        calories: Some(450),
        ingredients: vec![
            Ingredient {
                name: "豬絞肉".to_string(),
                shape: "細碎".to_string(),
                texture: "生".to_string(),
                amount: "200g".to_string(),
                color_hex: "#fca5a5".to_string(),
            },
            Ingredient {
                name: "高麗菜".to_string(),
                shape: "切末".to_string(),
                texture: "脆".to_string(),
                amount: "100g".to_string(),
                color_hex: "#86efac".to_string(),
            },
            Ingredient {
                name: "水餃皮".to_string(),
                shape: "圓形片狀".to_string(),
                texture: "軟".to_string(),
                amount: "20片".to_string(),
                color_hex: "#fef3c7".to_string(),
            },
        ],
        sauce: Some(Sauce {
            name: "蒜味醬油膏".to_string(),
            ingredients: vec![
                SauceIngredient {
                    name: "醬油膏".to_string(),
                    amount: "2大匙".to_string(),
                },
                SauceIngredient {
                    name: "蒜末".to_string(),
                    amount: "1瓣".to_string(),
                },
                SauceIngredient {
                    name: "香油".to_string(),
                    amount: "少許".to_string(),
                },
            ],
            mix_instruction: "將蒜末壓泥，與醬油膏、香油混合均勻即可。".to_string(),
        }),
        taste_profile: TasteProfile {
            salty: 3,
            acidic: 1,
            sweet: 2,
            spicy: 0,
            bitter: 0,
        },
        cooking_methods: vec![CookingMethod::PanFry, CookingMethod::Steam],
        steps: vec![
            CookingStep {
                step_number: 1,
                instruction: "將絞肉與蔬菜混合，加入少許鹽巴與白胡椒粉，順時針攪拌至有黏性產生"
                    .to_string(),
                success_tip: "肉餡呈現絲狀纖維，不再散開".to_string(),
                duration_seconds: None,
                heat_level: Some(HeatLevel::Off),
            },
            CookingStep {
                step_number: 2,
                instruction: "取一片水餃皮，中間放入適量餡料，邊緣抹水，對折捏緊封口".to_string(),
                success_tip: "確保無縫隙以免湯汁流失".to_string(),
                duration_seconds: None,
                heat_level: Some(HeatLevel::Off),
            },
            CookingStep {
                step_number: 3,
                instruction: "平底鍋熱鍋下油，將餃子整齊排列，中小火煎至底部定型".to_string(),
                success_tip: "翻看底部呈現均勻的淺黃色".to_string(),
                duration_seconds: Some(120),
                heat_level: Some(HeatLevel::Medium),
            },
            CookingStep {
                step_number: 4,
                instruction: "倒入麵粉水（水:麵粉=10:1）至餃子一半高度，蓋上鍋蓋悶煮".to_string(),
                success_tip: "聽見水份收乾的滋滋聲，且邊緣出現冰花".to_string(),
                duration_seconds: Some(300),
                heat_level: Some(HeatLevel::Medium),
            },
        ],
        image_url: None,
    }
}

fn teriyaki_chicken() -> Recipe {
    Recipe {
        id: "demo-2".to_string(),
        name: "日式照燒雞腿".to_string(),
        description: "鹹甜醬汁包覆軟嫩雞腿肉，下飯首選。".to_string(),
        cuisine: CuisineType::Japanese,
        difficulty: 3,
        prep_time_minutes: 10,
        cook_time_minutes: 15,
        total_time_minutes: 25,
        calories: Some(520),
        ingredients: vec![
            Ingredient {
                name: "去骨雞腿".to_string(),
                shape: "整塊".to_string(),
                texture: "生".to_string(),
                amount: "300g".to_string(),
                color_hex: "#f87171".to_string(),
            },
            Ingredient {
                name: "白芝麻".to_string(),
                shape: "顆粒".to_string(),
                texture: "熟".to_string(),
                amount: "少許".to_string(),
                color_hex: "#fdf4ff".to_string(),
            },
        ],
        sauce: Some(Sauce {
            name: "黃金照燒醬".to_string(),
            ingredients: vec![
                SauceIngredient {
                    name: "醬油".to_string(),
                    amount: "2大匙".to_string(),
                },
                SauceIngredient {
                    name: "味醂".to_string(),
                    amount: "2大匙".to_string(),
                },
                SauceIngredient {
                    name: "清酒/米酒".to_string(),
                    amount: "1大匙".to_string(),
                },
                SauceIngredient {
                    name: "砂糖".to_string(),
                    amount: "1大匙".to_string(),
                },
            ],
            mix_instruction: "將所有液體與砂糖混合，攪拌至糖顆粒完全溶解。".to_string(),
        }),
        taste_profile: TasteProfile {
            salty: 4,
            acidic: 0,
            sweet: 4,
            spicy: 0,
            bitter: 0,
        },
        cooking_methods: vec![CookingMethod::PanFry, CookingMethod::Boil],
        steps: vec![
            CookingStep {
                step_number: 1,
                instruction: "雞腿肉洗淨擦乾，皮面朝下入鍋，不放油直接乾煎逼出油脂".to_string(),
                success_tip: "雞皮呈現金黃酥脆，油脂被逼出".to_string(),
                duration_seconds: Some(300),
                heat_level: Some(HeatLevel::Medium),
            },
            CookingStep {
                step_number: 2,
                instruction: "翻面煎至肉色變白，用餐巾紙吸去鍋內多餘油脂".to_string(),
                success_tip: "雞肉表面微焦，鍋底清爽無積油".to_string(),
                duration_seconds: Some(180),
                heat_level: Some(HeatLevel::Low),
            },
            CookingStep {
                step_number: 3,
                instruction: "倒入調好的照燒醬汁，蓋鍋蓋悶煮2分鐘確保中心熟透".to_string(),
                success_tip: "醬汁開始冒大泡泡並變濃稠".to_string(),
                duration_seconds: Some(120),
                heat_level: Some(HeatLevel::Medium),
            },
            CookingStep {
                step_number: 4,
                instruction: "打開鍋蓋大火收汁，不停將醬汁淋在雞肉上使其上色光亮".to_string(),
                success_tip: "雞肉呈現光亮琥珀色，醬汁可掛在肉上".to_string(),
                duration_seconds: Some(60),
                heat_level: Some(HeatLevel::High),
            },
        ],
        image_url: None,
    }
}
