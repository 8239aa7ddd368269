//! Static content pages.

use dioxus::prelude::*;

use crate::routes::Route;

#[derive(Props, Clone, PartialEq)]
struct ProseProps {
    title: &'static str,
    children: Element,
}

/// Shared shell for long-copy pages.
#[component]
fn Prose(props: ProseProps) -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-6", "{props.title}" }
            div {
                class: "space-y-4 text-gray-700 leading-relaxed",
                {props.children}
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        Prose {
            title: "About Hoshi Vault",
            p {
                "Hoshi Vault is a privately held portfolio of premium domain names. We acquire "
                "short, memorable and category-defining names, hold them patiently, and place "
                "them with ventures that can put them to work."
            }
            p {
                "Every listing in the vault passed a deliberate acquisition process: length, "
                "language and liquidity. We publish our reasoning on each listing as a thesis, "
                "because a domain is only premium if the market agrees."
            }
            p {
                "We transact exclusively through licensed escrow services, and we lease as "
                "readily as we sell \u{2014} sometimes the right structure for a young company is a "
                "monthly line item, not a wire transfer."
            }
        }
    }
}

#[component]
pub fn Leasing() -> Element {
    rsx! {
        Prose {
            title: "Leasing a Domain",
            p {
                "Leasing converts a five-figure acquisition into a predictable operating "
                "expense. Terms run twelve, twenty-four or thirty-six months, and the full "
                "lease is credited against a later purchase."
            }
            p {
                "Lease-eligible listings show a calculator with the monthly figure for each "
                "term. DNS control transfers on day one; ownership transfers when the "
                "purchase completes."
            }
            p {
                Link {
                    to: Route::Portfolio {},
                    class: "text-indigo-600 hover:text-indigo-700",
                    "Browse lease-eligible domains in the portfolio \u{2192}"
                }
            }
        }
    }
}

#[component]
pub fn Selling() -> Element {
    rsx! {
        Prose {
            title: "Sell Us Your Domain",
            p {
                "We buy names that pass the same tests we apply to our own acquisitions: "
                "short, pronounceable, and credible across more than one industry."
            }
            p {
                "Send the name, your asking price and any traffic history through the "
                "contact form. We respond to every submission within three business days, "
                "and we do not share your information with anyone."
            }
            p {
                Link {
                    to: Route::Contact {},
                    class: "text-indigo-600 hover:text-indigo-700",
                    "Start a conversation \u{2192}"
                }
            }
        }
    }
}

#[component]
pub fn Faqs() -> Element {
    let entries = [
        (
            "How does escrow work?",
            "Funds are held by a licensed escrow service until the domain transfer is confirmed by both registrars. Neither party is exposed at any point.",
        ),
        (
            "Can I make an offer below the listed price?",
            "Listings marked Make Offer accept any offer above the stated minimum. Fixed-price listings occasionally have room \u{2014} inquire and we will tell you honestly.",
        ),
        (
            "What does Price on Application mean?",
            "Some names are priced only in the context of a conversation: the buyer, the use case and the structure all matter. POA listings never appear in price-filtered results.",
        ),
        (
            "Do leases include renewal fees?",
            "Yes. While a lease is active we keep the registration current at our expense.",
        ),
    ];

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-6", "Frequently Asked Questions" }
            div {
                class: "space-y-6",
                for (question, answer) in entries {
                    section {
                        h2 { class: "text-lg font-semibold text-gray-900 mb-1", "{question}" }
                        p { class: "text-gray-700 leading-relaxed", "{answer}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        Prose {
            title: "Terms of Service",
            p {
                "Listings on this site are invitations to negotiate, not binding offers. "
                "Prices may change or listings may be withdrawn at any time before an "
                "escrow agreement is signed."
            }
            p {
                "All sales and leases complete under a written agreement executed through a "
                "licensed escrow provider. Until that agreement is signed, no statement on "
                "this site or in correspondence creates an obligation for either party."
            }
            p {
                "Traffic estimates are provided in good faith from our own measurement and "
                "are not warranted."
            }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        Prose {
            title: "Privacy Policy",
            p {
                "We collect only what you give us: the contents of an inquiry or contact "
                "form. We use it to respond to you, and for nothing else."
            }
            p {
                "This site sets no tracking cookies and loads no third-party analytics. "
                "Filter selections are reflected in the page URL so you can share them; "
                "they are never transmitted to us."
            }
            p {
                "To have your correspondence deleted, reply to any message from us and ask."
            }
        }
    }
}
