//! Canned replies for the storefront assistant.
//!
//! Order is significant: the first keyword contained in the (lowercased)
//! user input wins, so short keywords declared early shadow later ones
//! ("shipping" contains "hi").

pub const RESPONSES: &[(&str, &str)] = &[
    ("hello", "Good Morning! 👋 How can I assist you today?"),
    ("hi", "Hi there! 👋 How can I help you find the perfect product?"),
    (
        "help",
        "I can help you with:\n- Product recommendations\n- Order information\n- Shipping details\n- Return policies\n- Payment methods\n\nWhat would you like to know?",
    ),
    (
        "products",
        "We have a wide range of products including headphones, smartwatches, cameras, and laptops. Each offers excellent quality and value. Would you like to know more about a specific category?",
    ),
    (
        "price",
        "Our products range from affordable to premium. Here are some examples:\n- Wireless Headphones: $79.99\n- Smart Watch: $199.99\n- Digital Camera: $599.99\n- Laptop: $999.99",
    ),
    (
        "shipping",
        "We offer free shipping on all orders! Delivery typically takes 5-7 business days. Track your order anytime from your account.",
    ),
    (
        "return",
        "We offer a 30-day money-back guarantee! If you're not satisfied, simply return the product for a full refund. No questions asked!",
    ),
    (
        "payment",
        "We accept all major payment methods including credit cards, debit cards, PayPal, and digital wallets for your convenience.",
    ),
    (
        "headphones",
        "Our Wireless Headphones are priced at $79.99. They feature premium sound quality, noise cancellation, and 30-hour battery life. Would you like to add them to your cart?",
    ),
    (
        "smartwatch",
        "Our Smart Watch is $199.99. Track your fitness, receive notifications, and stay connected. Perfect for active lifestyles!",
    ),
    (
        "camera",
        "Our Digital Camera is $599.99. Capture stunning photos with 4K video, advanced autofocus, and weather-resistant design.",
    ),
    (
        "laptop",
        "Our Laptop is $999.99. Powerful processor, 16GB RAM, 512GB SSD, perfect for work, gaming, and content creation.",
    ),
    (
        "contact",
        "You can reach our customer service team at:\n- Email: support@shophub.com\n- Phone: 1-800-SHOP-HUB\n- Chat: Available 24/7",
    ),
    (
        "discount",
        "Check out our current promotions and special offers in the Products section. New offers are updated weekly!",
    ),
    (
        "account",
        "you can manage your account, view order history, and update preferences in your profile settings.",
    ),
];

pub const DEFAULT_RESPONSE: &str = "Thanks for your question! I didn't quite understand that. Could you ask about our products, shipping, returns, or any other store information?";
