use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use mealcal_core::{DayCell, MonthGrid};
use std::fs;
use std::path::Path;

const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Default output filename for a given month, e.g. `meal_plan_2024_2.html`.
pub fn output_filename(year: i32, month: u32) -> String {
    format!("meal_plan_{}_{}.html", year, month)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Render the grid to a standalone HTML document and write it to `path`.
pub fn write_html(grid: &MonthGrid, path: &Path) -> Result<()> {
    let html = render_page(grid);
    fs::write(path, html.into_string())
        .with_context(|| format!("Failed to write meal plan to {}", path.display()))?;
    Ok(())
}

pub fn render_page(grid: &MonthGrid) -> Markup {
    let title = format!("Meal Plan for {} {}", month_name(grid.month), grid.year);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                table {
                    caption { (title) }
                    thead {
                        tr {
                            @for day in WEEKDAY_HEADERS {
                                th { (day) }
                            }
                        }
                    }
                    tbody {
                        @for week in &grid.weeks {
                            tr {
                                @for cell in week {
                                    (render_cell(cell))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_cell(cell: &DayCell) -> Markup {
    html! {
        @match cell {
            DayCell::Empty => {
                td {}
            }
            DayCell::Day { number, breakfast, dinner } => {
                td {
                    div.day { (number) }
                    div.meal { strong { "Breakfast:" } " " (breakfast) }
                    div.meal { strong { "Dinner:" } " " (dinner) }
                }
            }
        }
    }
}

const CSS: &str = r#"
body {
    font-family: Arial, sans-serif;
    margin: 20px;
    background-color: #f7f7f7;
}
table {
    width: 100%;
    margin: 20px 0;
    border-collapse: collapse;
    background-color: white;
    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
}
th, td {
    padding: 15px;
    text-align: center;
    border: 1px solid #ddd;
    width: 14%;
    vertical-align: top;
}
th {
    background-color: #4CAF50;
    color: white;
}
td {
    background-color: #f9f9f9;
}
td strong {
    color: #4CAF50;
}
tr:nth-child(even) td {
    background-color: #f1f1f1;
}
tr:hover {
    background-color: #f1f1f1;
}
caption {
    font-size: 1.5em;
    font-weight: bold;
    margin: 10px 0;
}
.meal {
    margin-bottom: 5px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use mealcal_core::{MealEntry, grid};

    fn sample_grid() -> MonthGrid {
        let meals = vec![
            MealEntry {
                breakfast: "Poha".to_string(),
                dinner: "Dal & Rice".to_string(),
            },
            MealEntry {
                breakfast: "Upma".to_string(),
                dinner: "Chole".to_string(),
            },
        ];
        grid::build(2024, 2, &meals).unwrap()
    }

    #[test]
    fn test_render_page_structure() {
        let html = render_page(&sample_grid()).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<caption>Meal Plan for February 2024</caption>"));
        for day in WEEKDAY_HEADERS {
            assert!(html.contains(&format!("<th>{}</th>", day)));
        }
        // Every day of the month gets a cell
        for day in 1..=29 {
            assert!(
                html.contains(&format!("<div class=\"day\">{}</div>", day)),
                "missing day {}",
                day
            );
        }
    }

    #[test]
    fn test_padding_cells_are_bare() {
        // Feb 2024: 3 leading empties (starts Thursday) and 3 trailing
        // empties (5 rows * 7 - 29 days - 3)
        let html = render_page(&sample_grid()).into_string();
        assert_eq!(html.matches("<td></td>").count(), 6);
    }

    #[test]
    fn test_meal_text_is_escaped() {
        let html = render_page(&sample_grid()).into_string();
        assert!(html.contains("Dal &amp; Rice"));
        assert!(!html.contains("Dal & Rice"));
    }

    #[test]
    fn test_output_filename_is_unpadded() {
        assert_eq!(output_filename(2024, 2), "meal_plan_2024_2.html");
        assert_eq!(output_filename(2025, 11), "meal_plan_2025_11.html");
    }
}
