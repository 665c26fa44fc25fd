use rust_decimal_macros::dec;

use crate::models::{MenuItem, Topping};

/// The catalog every fresh process starts with. The fixed ids keep seed
/// records addressable across restarts.
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".to_string(),
            name: "Brown Sugar Boba Milk".to_string(),
            base_price: dec!(25000),
            description: "Fresh milk, premium brown sugar syrup, chewy boba pearls.".to_string(),
            category: "Milk Tea".to_string(),
            sweetness_level: 100,
            ice_level: 100,
            image_url: "https://images.unsplash.com/photo-1573515200028-09195803104e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Mnx8YnJvd24lMjBzdWdhciUyMGJvYmF8ZW58MHx8MHx8fDA%3D&auto=format&fit=crop&w=500&q=60".to_string(),
            is_available: true,
            popularity: 10,
        },
        MenuItem {
            id: "2".to_string(),
            name: "Matcha Boba Latte".to_string(),
            base_price: dec!(28000),
            description: "Premium matcha, creamy milk, boba.".to_string(),
            category: "Coffee".to_string(),
            sweetness_level: 75,
            ice_level: 100,
            image_url: "https://images.unsplash.com/photo-1585340048809-20599449f0f7?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTF8fG1hdGNoYSUyMGJvYmF8ZW58MHx8MHx8fDA%3D&auto=format&fit=crop&w=500&q=60".to_string(),
            is_available: true,
            popularity: 8,
        },
        MenuItem {
            id: "3".to_string(),
            name: "Strawberry Bliss Tea".to_string(),
            base_price: dec!(26000),
            description: "Fresh strawberry fruit tea with popping boba.".to_string(),
            category: "Fruit Tea".to_string(),
            sweetness_level: 100,
            ice_level: 75,
            image_url: "https://images.unsplash.com/photo-1553529713-6a19349ea049?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8NHx8c3RyYXdiZXJyeSUyMGJvYmF8ZW58MHx8MHx8fDA%3D&auto=format&fit=crop&w=500&q=60".to_string(),
            is_available: false,
            popularity: 5,
        },
    ]
}

pub fn toppings() -> Vec<Topping> {
    vec![
        Topping {
            id: "t1".to_string(),
            name: "Boba Pearls".to_string(),
            additional_price: dec!(3000),
            description: "Classic chewy boba.".to_string(),
            is_available: true,
        },
        Topping {
            id: "t2".to_string(),
            name: "Coffee Jelly".to_string(),
            additional_price: dec!(4000),
            description: "Coffee-flavoured jelly.".to_string(),
            is_available: true,
        },
        Topping {
            id: "t3".to_string(),
            name: "Cheese Foam".to_string(),
            additional_price: dec!(5000),
            description: "Sweet and savoury cheese foam.".to_string(),
            is_available: false,
        },
    ]
}
