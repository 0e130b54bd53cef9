use serde_json::{Value, json};

/// A small invoice: a wordy description column and two short numeric columns.
pub fn invoice_header() -> Vec<&'static str> {
    vec!["Description", "Qty", "Amount"]
}

pub fn invoice_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Consulting services for the March release", "12", "1,200.00"],
        vec!["Travel, accommodation and <em>per diem</em>", "3", "845.50"],
        vec!["Licences", "40", "4,000.00"],
    ]
}

/// A complete table document using the given strategy.
pub fn invoice_document(strategy: Value) -> Value {
    json!({
        "config": {
            "fontSize": "10pt",
            "columnClassPrefix": "inv",
            "page": { "size": { "width": "400pt", "height": "600pt" }, "margins": "0 20pt" }
        },
        "strategy": strategy,
        "header": [
            "Description",
            { "content": "Qty", "class": "num" },
            { "content": "Amount", "class": "num" }
        ],
        "rows": invoice_rows()
    })
}
