//! HTML rendering for the transactions view.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        FORM_SELECT_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, PAGER_BUTTON_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
        truncate_cell_text,
    },
};

use super::{Month, Transaction, ViewSnapshot};

/// Render the full transactions page.
pub(crate) fn transactions_page(snapshot: &ViewSnapshot) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            (transactions_view(snapshot))
        }
    };

    base("Transactions", &content)
}

/// Render the transactions view itself.
///
/// This is the fragment the HTMX endpoints swap in place of the previous
/// one, so every control targets `#transactions-view`.
pub(crate) fn transactions_view(snapshot: &ViewSnapshot) -> Markup {
    let current_month = snapshot.filter.month();
    let page = snapshot.filter.page();

    html! {
        section id="transactions-view" class="w-full max-w-5xl space-y-4"
        {
            h2 class="text-xl font-bold" { "Transactions Table" }

            div class="flex flex-wrap items-center gap-4"
            {
                select
                    name="month"
                    class=(FORM_SELECT_STYLE)
                    hx-post=(endpoints::SET_MONTH)
                    hx-target="#transactions-view"
                    hx-swap="outerHTML"
                {
                    @for month in Month::ALL {
                        option value=(month) selected[month == current_month] { (month) }
                    }
                }

                div class="grow"
                {
                    input
                        type="search"
                        name="search"
                        placeholder="Search transactions..."
                        value=(snapshot.filter.search_text())
                        class=(FORM_TEXT_INPUT_STYLE)
                        hx-post=(endpoints::SEARCH)
                        hx-trigger="input changed delay:300ms"
                        hx-target="#transactions-view"
                        hx-swap="outerHTML";
                }
            }

            div class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
            {
                table class="w-full my-2 text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date of Sale" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Product Title" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class="px-6 py-4 text-right" { "Price" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Sold" }
                        }
                    }

                    tbody
                    {
                        @for transaction in &snapshot.transactions {
                            (transaction_row_view(transaction))
                        }

                        @if snapshot.transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan="6"
                                    data-empty-state="true"
                                    class="px-6 py-4 text-center"
                                {
                                    "No transactions found."
                                }
                            }
                        }
                    }
                }
            }

            (pager_view(page))
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let sale_date = transaction.date_of_sale.date();
    let (description, tooltip) = truncate_cell_text(&transaction.description);
    let sold_label = if transaction.sold { "Yes" } else { "No" };

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { time datetime=(sale_date) { (sale_date) } }
            td class=(TABLE_CELL_STYLE) { (transaction.product_title) }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
            td class="px-6 py-4 text-right tabular-nums"
            {
                (format_currency(transaction.price))
            }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE) { (sold_label) }
        }
    }
}

fn pager_view(page: u64) -> Markup {
    html! {
        nav class="pagination flex items-center justify-between"
        {
            button
                class=(PAGER_BUTTON_STYLE)
                disabled[page == 1]
                hx-post=(endpoints::PREVIOUS_PAGE)
                hx-target="#transactions-view"
                hx-swap="outerHTML"
            { "Previous" }

            span class="text-sm font-semibold" aria-current="page" { "Page " (page) }

            button
                class=(PAGER_BUTTON_STYLE)
                hx-post=(endpoints::NEXT_PAGE)
                hx-target="#transactions-view"
                hx-swap="outerHTML"
            { "Next" }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use scraper::{ElementRef, Html, Selector};
    use time::macros::datetime;

    use crate::transactions::{Month, Transaction, TransactionFilter, ViewSnapshot};

    use super::{transactions_page, transactions_view};

    fn transaction(id: &str, sold: bool) -> Transaction {
        Transaction {
            id: id.to_owned(),
            date_of_sale: datetime!(2022-03-05 10:30:00 UTC),
            product_title: format!("Product {id}"),
            description: "A useful product".to_owned(),
            price: 49.99,
            category: "electronics".to_owned(),
            sold,
        }
    }

    fn snapshot_with(transactions: Vec<Transaction>) -> ViewSnapshot {
        ViewSnapshot {
            filter: TransactionFilter::default(),
            transactions,
        }
    }

    fn parse_view(snapshot: &ViewSnapshot) -> Html {
        Html::parse_fragment(&transactions_view(snapshot).into_string())
    }

    #[track_caller]
    fn must_find_button<'a>(html: &'a Html, label: &str) -> ElementRef<'a> {
        html.select(&Selector::parse("button").unwrap())
            .find(|button| button.text().collect::<String>().trim() == label)
            .unwrap_or_else(|| panic!("No \"{label}\" button found"))
    }

    #[test]
    fn renders_twelve_month_options_with_current_selected() {
        let mut filter = TransactionFilter::default();
        filter.set_month(Month::July);
        let snapshot = ViewSnapshot {
            filter,
            transactions: Vec::new(),
        };

        let html = parse_view(&snapshot);

        let options: Vec<_> = html
            .select(&Selector::parse("select[name='month'] option").unwrap())
            .collect();
        assert_eq!(options.len(), 12, "want one option per calendar month");

        let selected: Vec<_> = options
            .iter()
            .filter(|option| option.value().attr("selected").is_some())
            .collect();
        assert_eq!(selected.len(), 1, "want exactly one selected option");
        assert_eq!(selected[0].text().collect::<String>(), "July");
    }

    #[test]
    fn renders_one_row_per_transaction() {
        let snapshot = snapshot_with(vec![transaction("a", true), transaction("b", false)]);

        let html = parse_view(&snapshot);

        let rows: Vec<_> = html
            .select(&Selector::parse("tbody tr[data-transaction-row='true']").unwrap())
            .collect();
        assert_eq!(rows.len(), 2, "want one table row per transaction");

        let cell_selector = Selector::parse("td").unwrap();
        let sold_labels: Vec<String> = rows
            .iter()
            .map(|row| {
                row.select(&cell_selector)
                    .last()
                    .expect("row has no cells")
                    .text()
                    .collect::<String>()
                    .trim()
                    .to_owned()
            })
            .collect();
        assert_eq!(sold_labels, ["Yes", "No"]);
    }

    #[test]
    fn row_cells_are_in_the_expected_column_order() {
        let snapshot = snapshot_with(vec![transaction("a", true)]);

        let html = parse_view(&snapshot);

        let row = html
            .select(&Selector::parse("tbody tr[data-transaction-row='true']").unwrap())
            .next()
            .expect("No transaction row found");
        let cells: Vec<String> = row
            .select(&Selector::parse("td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect();

        assert_eq!(
            cells,
            [
                "2022-03-05",
                "Product a",
                "A useful product",
                "$49.99",
                "electronics",
                "Yes"
            ]
        );
    }

    #[test]
    fn empty_page_renders_the_empty_state_row() {
        let snapshot = snapshot_with(Vec::new());

        let html = parse_view(&snapshot);

        let rows: Vec<_> = html
            .select(&Selector::parse("tbody tr[data-transaction-row='true']").unwrap())
            .collect();
        assert!(rows.is_empty(), "want zero transaction rows");

        let empty_state = html
            .select(&Selector::parse("td[data-empty-state='true']").unwrap())
            .next()
            .expect("No empty-state cell found");
        assert_eq!(empty_state.value().attr("colspan"), Some("6"));
    }

    #[test]
    fn previous_is_disabled_only_on_the_first_page() {
        let first_page = snapshot_with(Vec::new());
        let html = parse_view(&first_page);
        let previous = must_find_button(&html, "Previous");
        assert!(
            previous.value().attr("disabled").is_some(),
            "Previous should be disabled on page 1"
        );

        let mut filter = TransactionFilter::default();
        filter.next_page();
        let later_page = ViewSnapshot {
            filter,
            transactions: Vec::new(),
        };
        let html = parse_view(&later_page);
        let previous = must_find_button(&html, "Previous");
        assert!(
            previous.value().attr("disabled").is_none(),
            "Previous should be enabled past page 1"
        );
    }

    #[test]
    fn next_is_always_enabled() {
        let snapshot = snapshot_with(Vec::new());

        let html = parse_view(&snapshot);

        let next = must_find_button(&html, "Next");
        assert!(next.value().attr("disabled").is_none());
    }

    #[test]
    fn search_input_carries_the_current_text() {
        let mut filter = TransactionFilter::default();
        filter.set_search_text("phone".to_owned());
        let snapshot = ViewSnapshot {
            filter,
            transactions: Vec::new(),
        };

        let html = parse_view(&snapshot);

        let input = html
            .select(&Selector::parse("input[name='search']").unwrap())
            .next()
            .expect("No search input found");
        assert_eq!(input.value().attr("value"), Some("phone"));
        assert_eq!(
            input.value().attr("placeholder"),
            Some("Search transactions...")
        );
    }

    #[test]
    fn full_page_wraps_the_view_in_the_base_layout() {
        let snapshot = snapshot_with(Vec::new());

        let page = transactions_page(&snapshot).into_string();
        let html = Html::parse_document(&page);

        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
        html.select(&Selector::parse("section#transactions-view").unwrap())
            .next()
            .expect("Page does not contain the transactions view");
        let title = html
            .select(&Selector::parse("title").unwrap())
            .next()
            .expect("Page has no title");
        assert_eq!(title.text().collect::<String>(), "Transactions - Salesview");
    }
}
