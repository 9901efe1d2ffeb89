pub mod banner;
pub mod palette;
pub mod tui;
pub mod wheel_view;

use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};

/// Banner plus prompt theme. Once, at startup.
pub fn init_ui() {
    banner::print_welcome();
    apply_theme();
}

/// Wheel-coloured prompt theme.
pub fn apply_theme() {
    let mut cfg = RenderConfig::default();
    cfg.prompt_prefix = Styled::new("◆").with_fg(Color::LightCyan);
    cfg.highlighted_option_prefix = Styled::new("➤").with_fg(Color::LightMagenta);
    cfg.selected_option = Some(StyleSheet::new().with_fg(Color::LightMagenta));
    cfg.answer = StyleSheet::new().with_fg(Color::LightCyan);
    cfg.help_message = StyleSheet::new().with_fg(Color::DarkGrey);
    inquire::set_global_render_config(cfg);
}
