//! Lease calculator: monthly cost for a price over a selected term.

use dioxus::prelude::*;

/// Monthly cost in dollars, to the cent.
pub fn monthly_cost(price: u64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }
    let raw = price as f64 / term_months as f64;
    (raw * 100.0).round() / 100.0
}

/// Props for LeaseCalculator
#[derive(Props, Clone, PartialEq)]
pub struct LeaseCalculatorProps {
    pub price: u64,
    pub terms: Vec<u32>,
}

#[component]
pub fn LeaseCalculator(props: LeaseCalculatorProps) -> Element {
    let terms = props.terms.clone();
    let price = props.price;
    let mut term = use_signal(move || terms.first().copied().unwrap_or(12));
    let monthly = monthly_cost(price, term());

    rsx! {
        div {
            class: "border border-gray-200 rounded-xl p-4 mt-3",
            h4 { class: "text-sm font-semibold text-gray-900 mb-2", "Lease Calculator" }
            div {
                class: "flex items-center gap-2 mb-3",
                label { r#for: "lease-term", class: "text-sm text-gray-600", "Term:" }
                select {
                    id: "lease-term",
                    class: "px-3 py-1.5 border border-gray-300 rounded-lg text-sm",
                    value: "{term}",
                    onchange: move |e| {
                        if let Ok(months) = e.value().parse() {
                            term.set(months);
                        }
                    },
                    for t in props.terms.iter() {
                        option { value: "{t}", "{t} months" }
                    }
                }
            }
            p {
                class: "text-sm text-gray-700",
                strong { "${monthly:.2}" }
                " / month \u{00a0}|\u{00a0} Total: "
                strong { "${price}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_price_evenly_across_the_term() {
        assert_eq!(monthly_cost(9600, 12), 800.0);
        assert_eq!(monthly_cost(9600, 24), 400.0);
    }

    #[test]
    fn rounds_to_the_cent() {
        assert_eq!(monthly_cost(10000, 36), 277.78);
    }

    #[test]
    fn zero_term_is_free_of_division() {
        assert_eq!(monthly_cost(5000, 0), 0.0);
    }
}
