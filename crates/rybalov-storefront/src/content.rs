//! Static page copy.

/// Store name shown in the header and footer.
pub const BRAND: &str = "РыбаЛов";

/// Hero banner content.
#[derive(Debug, Clone, Copy)]
pub struct HeroContent {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub emblems: [&'static str; 3],
}

pub const HERO: HeroContent = HeroContent {
    headline: "Всё для рыбалки в одном месте",
    subheadline: "Профессиональные снасти, приманки и аксессуары для успешной рыбалки",
    emblems: ["\u{1f3a3}", "\u{1f41f}", "\u{1f30a}"],
};

/// A "why us" feature card.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES_HEADING: &str = "Почему выбирают нас";

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "Award",
        title: "Качество",
        text: "Только проверенные бренды",
    },
    Feature {
        icon: "Truck",
        title: "Доставка",
        text: "Быстрая доставка по всей России",
    },
    Feature {
        icon: "Shield",
        title: "Гарантия",
        text: "Официальная гарантия на всё",
    },
];

pub const PRODUCTS_HEADING: &str = "Популярные товары";
pub const ADD_TO_CART: &str = "В корзину";

pub const TUTORIALS_HEADING: &str = "Обучение рыбалке";
pub const TUTORIALS_SUBHEADING: &str = "Видеоуроки и статьи от профессионалов";

pub const CART_TITLE: &str = "Корзина";
pub const CART_EMPTY: &str = "Корзина пуста";
pub const CART_TOTAL: &str = "Итого:";
pub const CHECKOUT: &str = "Оформить заказ";

pub const FOOTER: &str = "\u{a9} 2024 РыбаЛов. Все права защищены.";
