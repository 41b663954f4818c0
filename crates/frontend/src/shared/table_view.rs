//! Табличная view-model: фильтр, устойчивая сортировка и пагинация
//! поверх in-memory коллекции.
//!
//! Чистая функция от входов; экран хранит [`TableViewState`] у себя
//! и пересчитывает [`apply`] на каждое изменение. Состояние живёт
//! вместе с экраном и сбрасывается при уходе с него.

use std::cmp::Ordering;

/// Значение ячейки, которое возвращает accessor колонки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Значение отсутствует; при сортировке идёт раньше заполненных
    Missing,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        CellValue::Number(value)
    }

    /// Строка для отображения и фильтрации
    pub fn display(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Missing => 0,
            CellValue::Number(_) => 1,
            CellValue::Text(_) => 2,
        }
    }

    /// Числа сравниваются численно, текст — без учёта регистра,
    /// отсутствующие значения раньше любых заполненных
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Описание колонки: ключ, заголовок, accessor и признак сортируемости
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub accessor: fn(&T) -> CellValue,
    pub sortable: bool,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(key: &'static str) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: &'static str) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// Состояние таблицы одного экрана
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewState {
    pub filter_text: String,
    pub sort: Vec<SortKey>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort: Vec::new(),
            page_index: 0,
            page_size: 10,
        }
    }
}

impl TableViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Смена фильтра возвращает таблицу на первую страницу
    pub fn set_filter(&mut self, text: String) {
        self.filter_text = text;
        self.page_index = 0;
    }

    /// Клик по заголовку: повторный клик по активной колонке меняет
    /// направление, клик по другой — заменяет сортировку
    pub fn toggle_sort(&mut self, key: &'static str) {
        match self.sort.first().copied() {
            Some(current) if current.key == key => {
                self.sort = vec![SortKey {
                    key,
                    direction: current.direction.flipped(),
                }];
            }
            _ => {
                self.sort = vec![SortKey::ascending(key)];
            }
        }
    }
}

/// Видимая страница таблицы
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub page_rows: Vec<T>,
    pub total_count: usize,
    pub page_count: usize,
    /// Индекс страницы после клэмпа в `[0, page_count-1]`
    pub page_index: usize,
}

/// Применить фильтр, сортировку и пагинацию.
///
/// Строка проходит фильтр, если значение хотя бы одной колонки
/// содержит текст фильтра без учёта регистра. Сортировка устойчива:
/// равные по всем ключам строки сохраняют исходный порядок.
pub fn apply<T: Clone>(
    rows: &[T],
    columns: &[ColumnDef<T>],
    state: &TableViewState,
) -> TableView<T> {
    debug_assert!(state.page_size > 0, "page_size must be positive");

    let filter = state.filter_text.trim().to_lowercase();
    let mut visible: Vec<&T> = rows
        .iter()
        .filter(|row| row_matches(*row, columns, &filter))
        .collect();

    if !state.sort.is_empty() {
        visible.sort_by(|a, b| compare_rows(*a, *b, columns, &state.sort));
    }

    let total_count = visible.len();
    let page_count = page_count(total_count, state.page_size);
    let page_index = state.page_index.min(page_count - 1);

    let start = page_index * state.page_size;
    let end = (start + state.page_size).min(total_count);
    let page_rows = visible
        .get(start..end)
        .unwrap_or(&[])
        .iter()
        .map(|row| (*row).clone())
        .collect();

    TableView {
        page_rows,
        total_count,
        page_count,
        page_index,
    }
}

/// `max(1, ceil(total / page_size))`: пустая таблица занимает одну страницу
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    }
}

fn row_matches<T>(row: &T, columns: &[ColumnDef<T>], filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    columns
        .iter()
        .any(|column| (column.accessor)(row).display().to_lowercase().contains(filter))
}

fn compare_rows<T>(a: &T, b: &T, columns: &[ColumnDef<T>], sort: &[SortKey]) -> Ordering {
    for sort_key in sort {
        let Some(column) = columns
            .iter()
            .find(|c| c.key == sort_key.key && c.sortable)
        else {
            // Неизвестный или несортируемый ключ не влияет на порядок
            continue;
        };
        let ordering = (column.accessor)(a).compare(&(column.accessor)(b));
        let ordering = match sort_key.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator(state: &TableViewState, key: &str) -> &'static str {
    match state.sort.first() {
        Some(current) if current.key == key => match current.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        price: Option<f64>,
        category: &'static str,
    }

    fn item(name: &'static str, price: Option<f64>, category: &'static str) -> Item {
        Item {
            name,
            price,
            category,
        }
    }

    fn columns() -> Vec<ColumnDef<Item>> {
        vec![
            ColumnDef {
                key: "name",
                header: "Name",
                accessor: |i| CellValue::text(i.name),
                sortable: true,
            },
            ColumnDef {
                key: "price",
                header: "Price",
                accessor: |i| match i.price {
                    Some(p) => CellValue::number(p),
                    None => CellValue::Missing,
                },
                sortable: true,
            },
            ColumnDef {
                key: "category",
                header: "Category",
                accessor: |i| CellValue::text(i.category),
                sortable: true,
            },
        ]
    }

    fn fixture() -> Vec<Item> {
        vec![
            item("Wireless Headphones", Some(199.99), "Electronics"),
            item("Laptop Stand", Some(49.99), "Electronics"),
            item("Coffee Mug", Some(12.99), "Home"),
            item("Running Shoes", Some(89.99), "Sports"),
            item("Programming Book", None, "Books"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_order() {
        let rows = fixture();
        let view = apply(&rows, &columns(), &TableViewState::default());
        assert_eq!(view.page_rows, rows);
        assert_eq!(view.total_count, 5);
    }

    #[test]
    fn test_filter_is_case_insensitive_subset() {
        let rows = fixture();
        let mut state = TableViewState::default();
        state.set_filter("ELECTRO".to_string());

        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.total_count, 2);
        for row in &view.page_rows {
            assert!(rows.contains(row));
            assert!(row.category.to_lowercase().contains("electro"));
        }
    }

    #[test]
    fn test_filter_matches_any_column() {
        let rows = fixture();
        let mut state = TableViewState::default();
        state.set_filter("199.99".to_string());

        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.page_rows, vec![rows[0].clone()]);
    }

    #[test]
    fn test_missing_value_never_matches_filter() {
        let rows = vec![item("Mystery", None, "Unknown")];
        let mut state = TableViewState::default();
        state.set_filter("0".to_string());

        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.total_count, 0);
    }

    #[test]
    fn test_sort_is_permutation_and_idempotent() {
        let rows = fixture();
        let state = TableViewState {
            sort: vec![SortKey::ascending("name")],
            page_size: 100,
            ..Default::default()
        };

        let once = apply(&rows, &columns(), &state);
        assert_eq!(once.page_rows.len(), rows.len());
        for row in &rows {
            assert!(once.page_rows.contains(row));
        }

        let twice = apply(&once.page_rows, &columns(), &state);
        assert_eq!(once.page_rows, twice.page_rows);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let rows = vec![
            item("B", Some(1.0), "Same"),
            item("A", Some(2.0), "Same"),
            item("C", Some(3.0), "Same"),
        ];
        let state = TableViewState {
            sort: vec![SortKey::ascending("category")],
            ..Default::default()
        };

        // все равны по ключу: порядок ввода сохраняется
        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.page_rows, rows);
    }

    #[test]
    fn test_missing_sorts_before_defined() {
        let rows = fixture();
        let state = TableViewState {
            sort: vec![SortKey::ascending("price")],
            ..Default::default()
        };

        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.page_rows[0].name, "Programming Book");
        assert_eq!(view.page_rows[1].name, "Coffee Mug");
        assert_eq!(view.page_rows.last().unwrap().name, "Wireless Headphones");
    }

    #[test]
    fn test_descending_sort() {
        let rows = fixture();
        let state = TableViewState {
            sort: vec![SortKey::descending("price")],
            ..Default::default()
        };

        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.page_rows[0].name, "Wireless Headphones");
        // отсутствующая цена уходит в конец при обратном порядке
        assert_eq!(view.page_rows.last().unwrap().name, "Programming Book");
    }

    #[test]
    fn test_multi_key_sort() {
        let rows = vec![
            item("Zeta", Some(5.0), "Electronics"),
            item("Alpha", Some(9.0), "Home"),
            item("Beta", Some(7.0), "Electronics"),
        ];
        let state = TableViewState {
            sort: vec![SortKey::ascending("category"), SortKey::ascending("name")],
            ..Default::default()
        };

        let view = apply(&rows, &columns(), &state);
        let names: Vec<_> = view.page_rows.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Beta", "Zeta", "Alpha"]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_order() {
        let rows = fixture();
        let state = TableViewState {
            sort: vec![SortKey::ascending("nonexistent")],
            ..Default::default()
        };

        let view = apply(&rows, &columns(), &state);
        assert_eq!(view.page_rows, rows);
    }

    #[test]
    fn test_pagination_twelve_rows_page_size_five() {
        let rows: Vec<Item> = (0..12)
            .map(|i| match i {
                0 => item("Item 00", Some(0.0), "Bulk"),
                1 => item("Item 01", Some(1.0), "Bulk"),
                2 => item("Item 02", Some(2.0), "Bulk"),
                3 => item("Item 03", Some(3.0), "Bulk"),
                4 => item("Item 04", Some(4.0), "Bulk"),
                5 => item("Item 05", Some(5.0), "Bulk"),
                6 => item("Item 06", Some(6.0), "Bulk"),
                7 => item("Item 07", Some(7.0), "Bulk"),
                8 => item("Item 08", Some(8.0), "Bulk"),
                9 => item("Item 09", Some(9.0), "Bulk"),
                10 => item("Item 10", Some(10.0), "Bulk"),
                _ => item("Item 11", Some(11.0), "Bulk"),
            })
            .collect();

        let mut state = TableViewState::with_page_size(5);

        let first = apply(&rows, &columns(), &state);
        assert_eq!(first.page_rows.len(), 5);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total_count, 12);

        state.page_index = 2;
        let last = apply(&rows, &columns(), &state);
        assert_eq!(last.page_rows.len(), 2);
        assert_eq!(last.page_rows[0].name, "Item 10");
    }

    #[test]
    fn test_page_index_clamped_when_filter_shrinks_rows() {
        let rows = fixture();
        let mut state = TableViewState::with_page_size(2);
        state.page_index = 2; // валидная третья страница из пяти строк

        let before = apply(&rows, &columns(), &state);
        assert_eq!(before.page_index, 2);

        state.filter_text = "coffee".to_string(); // остаётся одна строка
        let after = apply(&rows, &columns(), &state);
        assert_eq!(after.total_count, 1);
        assert_eq!(after.page_count, 1);
        assert_eq!(after.page_index, 0);
        assert_eq!(after.page_rows.len(), 1);
    }

    #[test]
    fn test_empty_rows_still_have_one_page() {
        let rows: Vec<Item> = Vec::new();
        let view = apply(&rows, &columns(), &TableViewState::default());
        assert_eq!(view.page_count, 1);
        assert_eq!(view.page_index, 0);
        assert!(view.page_rows.is_empty());
    }

    #[test]
    fn test_toggle_sort_flips_then_replaces() {
        let mut state = TableViewState::default();

        state.toggle_sort("name");
        assert_eq!(state.sort, vec![SortKey::ascending("name")]);

        state.toggle_sort("name");
        assert_eq!(state.sort, vec![SortKey::descending("name")]);

        state.toggle_sort("price");
        assert_eq!(state.sort, vec![SortKey::ascending("price")]);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut state = TableViewState::default();
        state.page_index = 4;
        state.set_filter("mug".to_string());
        assert_eq!(state.page_index, 0);
    }
}
