use crate::ui::app::App;
use crate::ui::entry::render_entry;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::navigation::Route;
use crate::ui::results::render_results;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route(), app.results()).widget(), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::Entry => render_entry(frame, body, app.entry()),
        Route::Results { .. } => render_results(
            frame,
            body,
            app.results(),
            app.thumbnails(),
            app.image_size(),
        ),
    }
    frame.render_widget(Footer::new(app.route()).widget(footer), footer);
}
