pub mod completion;
pub mod level_menu;
pub mod play;
pub mod variant_select;
