use menuboard_shared::MenuItem;

/// Items every fresh catalog starts with. Recreated identically on each run.
pub fn seed_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".to_owned(),
            title: "Classic Burger".to_owned(),
            description: "Beef patty with lettuce and tomato".to_owned(),
            price: 12.50,
            category: "Main".to_owned(),
            is_available: true,
            image_url: None,
        },
        MenuItem {
            id: "2".to_owned(),
            title: "Caesar Salad".to_owned(),
            description: "Romaine lettuce, croutons, parmesan cheese".to_owned(),
            price: 9.00,
            category: "Appetizer".to_owned(),
            is_available: true,
            image_url: None,
        },
    ]
}
