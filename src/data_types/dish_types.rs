use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Starter,
    MainCourse,
    Dessert,
    Sides,
}

impl MealType {
    /// Menu order, also the key order of every category count map.
    pub const ALL: [MealType; 4] = [
        MealType::Starter,
        MealType::MainCourse,
        MealType::Dessert,
        MealType::Sides,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Starter => "STARTER",
            MealType::MainCourse => "MAIN_COURSE",
            MealType::Dessert => "DESSERT",
            MealType::Sides => "SIDES",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Starter => "Starter",
            MealType::MainCourse => "Main Course",
            MealType::Dessert => "Dessert",
            MealType::Sides => "Sides",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietType {
    Veg,
    NonVeg,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "VEG",
            DietType::NonVeg => "NON_VEG",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub is_recommended_for_meal_suggestion: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub meal_type: MealType,
    #[serde(rename = "type")]
    pub diet: DietType,
    pub category_id: i64,
    // free text, e.g. "CURRY" or "FRIED"
    pub dish_type: String,
    pub category: CategoryInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DishWithIngredients {
    pub dish: Dish,
    pub ingredients: Vec<Ingredient>,
}
