use catalog_core::catalog::TitleField;
use ratatui::layout::Constraint;

/// One rendered table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub field: TitleField,
    pub label: &'static str,
    pub width: Constraint,
}

/// Columns of the search table, left to right.
pub const COLUMNS: [Column; 11] = [
    Column { field: TitleField::Id, label: "Show ID", width: Constraint::Length(8) },
    Column { field: TitleField::Kind, label: "Type", width: Constraint::Length(8) },
    Column { field: TitleField::Title, label: "Title", width: Constraint::Length(24) },
    Column { field: TitleField::Directors, label: "Director", width: Constraint::Length(20) },
    Column { field: TitleField::ReleaseYear, label: "Release Year", width: Constraint::Length(12) },
    Column { field: TitleField::Rating, label: "Rating", width: Constraint::Length(7) },
    Column { field: TitleField::Duration, label: "Duration", width: Constraint::Length(10) },
    Column { field: TitleField::DateAdded, label: "Date Added", width: Constraint::Length(11) },
    Column { field: TitleField::Countries, label: "Country", width: Constraint::Length(16) },
    Column { field: TitleField::Categories, label: "Listed In", width: Constraint::Length(22) },
    Column { field: TitleField::Description, label: "Description", width: Constraint::Fill(1) },
];
