use crate::service::calendar::{CalendarCell, MonthGrid};
use crate::service::translation::Translator;

fn render_cell(cell: &CalendarCell) -> String {
    let day = format!("{:>2}", cell.day_number);
    if cell.is_selected {
        format!("[{day}]")
    } else if cell.is_today && cell.belongs_to_current_month {
        format!("<{day}>")
    } else if !cell.is_selectable() {
        format!("({day})")
    } else {
        format!(" {day} ")
    }
}

/// Six weeks under a translated title. `[dd]` selected, `<dd>` today,
/// `(dd)` not selectable.
pub fn render_month(grid: &MonthGrid, translator: &Translator) -> String {
    let mut lines = vec![grid.cursor.title(translator)];
    lines.push(
        MonthGrid::weekday_headers(translator)
            .iter()
            .map(|name| format!("{:^4}", name.chars().take(3).collect::<String>()))
            .collect::<Vec<_>>()
            .join(" "),
    );
    for week in grid.weeks() {
        lines.push(week.iter().map(render_cell).collect::<Vec<_>>().join(" "));
    }
    lines.join("\n")
}
