//! Fixed dish catalog.
//!
//! Built once at startup and shared read-only between handlers and the
//! selection store. Filtering is a linear scan that keeps catalog order.
use std::collections::BTreeMap;

use crate::data_backend::{non_empty, unsplash_url};
use crate::data_types::dish_types::{
    CategoryInfo, DietType, Dish, DishWithIngredients, Ingredient, MealType,
};
use crate::data_types::DishQuery;
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
    ingredients: BTreeMap<i64, Vec<Ingredient>>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>, ingredients: BTreeMap<i64, Vec<Ingredient>>) -> Self {
        Catalog {
            dishes,
            ingredients,
        }
    }

    pub fn builtin() -> Self {
        Catalog::new(builtin_dishes(), builtin_ingredients())
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn get_dish(&self, dish_id: i64) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == dish_id)
    }

    /// All dishes matching every given criterion. Meal and diet tokens match
    /// case-insensitively and exactly; `search` is a case-insensitive
    /// substring of the dish name. Unknown tokens simply match nothing.
    pub fn find(&self, query: &DishQuery) -> Vec<Dish> {
        let meal_type = non_empty(&query.meal_type);
        let dish_type = non_empty(&query.dish_type);
        let search = non_empty(&query.search).map(str::to_lowercase);

        self.dishes
            .iter()
            .filter(|dish| {
                meal_type.map_or(true, |m| dish.meal_type.as_str().eq_ignore_ascii_case(m))
                    && dish_type.map_or(true, |t| dish.diet.as_str().eq_ignore_ascii_case(t))
                    && search
                        .as_deref()
                        .map_or(true, |s| dish.name.to_lowercase().contains(s))
            })
            .cloned()
            .collect()
    }

    pub fn get_ingredients(&self, dish_id: i64) -> Result<DishWithIngredients, AppError> {
        let dish = self
            .get_dish(dish_id)
            .ok_or(AppError::DishNotFound(dish_id))?;

        Ok(DishWithIngredients {
            dish: dish.clone(),
            ingredients: self.ingredients.get(&dish_id).cloned().unwrap_or_default(),
        })
    }
}

fn category(id: i64, name: &str) -> CategoryInfo {
    CategoryInfo {
        id,
        name: name.to_string(),
        image: String::new(),
        is_recommended_for_meal_suggestion: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn dish(
    id: i64,
    name: &str,
    description: &str,
    photo: &str,
    meal_type: MealType,
    diet: DietType,
    dish_type: &str,
    category: CategoryInfo,
) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: Some(unsplash_url(photo)),
        meal_type,
        diet,
        category_id: category.id,
        dish_type: dish_type.to_string(),
        category,
    }
}

#[rustfmt::skip]
fn builtin_dishes() -> Vec<Dish> {
    use DietType::{NonVeg, Veg};
    use MealType::{Dessert, MainCourse, Sides, Starter};

    let north_indian = || category(1, "North Indian");
    let indian_snacks = || category(2, "Indian Snacks");
    let seafood = || category(4, "Seafood");
    let indian_sweets = || category(7, "Indian Sweets");
    let accompaniments = || category(12, "Accompaniments");

    vec![
        dish(101, "Samosa", "Crispy fried pastry with spiced potato filling",
            "1601050690597-df0568f70950", Starter, Veg, "SNACK", indian_snacks()),
        dish(102, "Chicken Wings", "Spicy grilled chicken wings with herbs",
            "1567620832903-9fc6debc209f", Starter, NonVeg, "GRILLED", category(3, "Grilled Items")),
        dish(103, "Paneer Tikka", "Marinated cottage cheese grilled to perfection",
            "1599487488170-d11ec9c172f0", Starter, Veg, "GRILLED", indian_snacks()),
        dish(104, "Fish Fry", "Crispy fried fish with coastal spices",
            "1544943910-4c1dc44aab44", Starter, NonVeg, "FRIED", seafood()),
        dish(105, "Spring Rolls", "Crispy vegetable spring rolls with sweet chili sauce",
            "1563245372-f21724e3856d", Starter, Veg, "FRIED", category(5, "Chinese")),

        dish(201, "Butter Chicken", "Creamy tomato-based chicken curry",
            "1603894584373-5ac82b2ae398", MainCourse, NonVeg, "CURRY", north_indian()),
        dish(202, "Kadhai Paneer", "Paneer cubes in spicy onion gravy with capsicum",
            "1631452180539-96aca7d48617", MainCourse, Veg, "CURRY", north_indian()),
        dish(203, "Biryani", "Aromatic basmati rice with spiced meat/vegetables",
            "1563379091339-03246963d96c", MainCourse, NonVeg, "RICE", category(6, "Biryani")),
        dish(204, "Dal Tadka", "Yellow lentils tempered with aromatic spices",
            "1546833999-b9f581a1996d", MainCourse, Veg, "DAL", north_indian()),
        dish(205, "Fish Curry", "Traditional coastal fish curry with coconut",
            "1585032226651-759b368d7246", MainCourse, NonVeg, "CURRY", seafood()),

        dish(301, "Gulab Jamun", "Sweet milk dumplings in sugar syrup",
            "1571115764595-644a1f56a55c", Dessert, Veg, "SWEET", indian_sweets()),
        dish(302, "Chocolate Cake", "Rich chocolate sponge cake with chocolate frosting",
            "1578985545062-69928b1d9587", Dessert, Veg, "CAKE", category(8, "Cakes")),
        dish(303, "Kulfi", "Traditional Indian ice cream with cardamom",
            "1570197788417-0e82375c9371", Dessert, Veg, "FROZEN", indian_sweets()),
        dish(304, "Tiramisu", "Italian coffee-flavored dessert",
            "1571877227200-a0d98ea607e9", Dessert, Veg, "LAYERED", category(9, "Continental")),

        dish(401, "Naan", "Soft Indian bread baked in tandoor",
            "1585937421612-70a008356fbe", Sides, Veg, "BREAD", category(10, "Breads")),
        dish(402, "Jeera Rice", "Basmati rice flavored with cumin seeds",
            "1586201375761-83865001e31c", Sides, Veg, "RICE", category(11, "Rice")),
        dish(403, "Raita", "Yogurt-based side dish with vegetables",
            "1606491956689-2ea866880c84", Sides, Veg, "YOGURT", accompaniments()),
        dish(404, "Papad", "Crispy thin wafers made from lentil flour",
            "1601050690597-df0568f70950", Sides, Veg, "CRISPY", accompaniments()),
    ]
}

fn ingredient_list(items: &[(&str, &str, &str)]) -> Vec<Ingredient> {
    items
        .iter()
        .map(|(name, quantity, unit)| Ingredient {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        })
        .collect()
}

#[rustfmt::skip]
fn builtin_ingredients() -> BTreeMap<i64, Vec<Ingredient>> {
    BTreeMap::from([
        (101, ingredient_list(&[
            ("Potato", "2", "medium"),
            ("Onion", "1", "small"),
            ("Spices", "1", "tsp"),
        ])),
        (102, ingredient_list(&[
            ("Chicken Wings", "500", "grams"),
            ("Herbs", "2", "tbsp"),
            ("Spices", "1", "tsp"),
        ])),
        (103, ingredient_list(&[
            ("Paneer", "250", "grams"),
            ("Yogurt", "2", "tbsp"),
            ("Spices", "1", "tsp"),
        ])),
        (201, ingredient_list(&[
            ("Chicken", "500", "grams"),
            ("Tomatoes", "3", "medium"),
            ("Cream", "100", "ml"),
        ])),
        (202, ingredient_list(&[
            ("Paneer", "250", "grams"),
            ("Capsicum", "1", "large"),
            ("Onion", "2", "medium"),
        ])),
        (301, ingredient_list(&[
            ("Milk Powder", "1", "cup"),
            ("Sugar", "1", "cup"),
            ("Cardamom", "4", "pods"),
        ])),
        (401, ingredient_list(&[
            ("All Purpose Flour", "2", "cups"),
            ("Yogurt", "2", "tbsp"),
            ("Baking Powder", "1", "tsp"),
        ])),
    ])
}
