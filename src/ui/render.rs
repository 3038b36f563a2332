use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let regions = layout_regions(frame.area());

    // Body first: it decides which keys the footer advertises.
    app.render(frame.buffer_mut(), regions.body);

    frame.render_widget(Header::new().widget(&app.breadcrumbs()), regions.header);
    let footer = Footer::new().widget(regions.footer, &app.hints(), app.can_dismiss());
    frame.render_widget(footer, regions.footer);
}
