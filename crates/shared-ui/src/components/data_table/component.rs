use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "data-table", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row. `muted` dims rows the member cannot act on, such as books
/// already on loan.
#[component]
pub fn DataTableRow(#[props(default = false)] muted: bool, children: Element) -> Element {
    let class = if muted {
        "data-table-row muted"
    } else {
        "data-table-row"
    };
    rsx! {
        tr { class: "{class}", {children} }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// A single full-width row used when the table has nothing to show.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
        }
    }
}
