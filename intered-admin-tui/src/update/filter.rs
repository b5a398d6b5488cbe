//! Search / date input line

use intered_admin_core::utils::datetime::parse_filter_date;

use crate::message::FilterMessage;
use crate::model::state::FilterKind;
use crate::model::App;

pub fn update(app: &mut App, msg: FilterMessage) {
    let Some(input) = app.input.as_mut() else {
        return;
    };

    match msg {
        FilterMessage::Input(ch) => {
            input.buffer.push(ch);
            input.error = None;
        }
        FilterMessage::Backspace => {
            input.buffer.pop();
            input.error = None;
        }
        FilterMessage::Commit => {
            if input.kind == FilterKind::Date {
                match parse_filter_date(&input.buffer) {
                    Ok(date) => {
                        if let Some(list) = app.lists.get_mut(app.current_page) {
                            list.set_date(date);
                        }
                    }
                    Err(e) => {
                        let message = e
                            .field_errors()
                            .first()
                            .map_or_else(|| e.to_string(), |field| field.message.clone());
                        log::warn!("Rejected date filter '{}': {message}", input.buffer);
                        input.error = Some(message);
                        return;
                    }
                }
            }
            app.input = None;
            return;
        }
        FilterMessage::Cancel => {
            if input.kind == FilterKind::Search {
                let original = input.original.clone();
                if let Some(list) = app.lists.get_mut(app.current_page) {
                    list.set_search(original);
                }
            }
            app.input = None;
            return;
        }
    }

    // search applies on every keystroke, the date only on commit
    if input.kind == FilterKind::Search {
        let query = input.buffer.clone();
        if let Some(list) = app.lists.get_mut(app.current_page) {
            list.set_search(query);
        }
    }
}
