mod button_icon;

pub use button_icon::{ButtonIcon, ButtonIconView};
