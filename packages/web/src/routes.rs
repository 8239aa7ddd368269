//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{CompareTray, Footer, Header, InquiryDrawer};
use crate::pages::{
    About, Categories, CategoryDetail, Contact, DomainDetail, Faqs, Home, InsightDetail, Insights,
    Leasing, Portfolio, PortfolioBrandable, PortfolioGeo, PortfolioPremium, PortfolioShort,
    Privacy, Selling, Terms,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/portfolio")]
        Portfolio {},

        #[route("/portfolio/short")]
        PortfolioShort {},

        #[route("/portfolio/premium")]
        PortfolioPremium {},

        #[route("/portfolio/brandable")]
        PortfolioBrandable {},

        #[route("/portfolio/geo")]
        PortfolioGeo {},

        #[route("/categories")]
        Categories {},

        #[route("/categories/:slug")]
        CategoryDetail { slug: String },

        #[route("/domain/:slug")]
        DomainDetail { slug: String },

        #[route("/insights")]
        Insights {},

        #[route("/insights/:slug")]
        InsightDetail { slug: String },

        #[route("/about")]
        About {},

        #[route("/leasing")]
        Leasing {},

        #[route("/selling")]
        Selling {},

        #[route("/contact")]
        Contact {},

        #[route("/faqs")]
        Faqs {},

        #[route("/terms")]
        Terms {},

        #[route("/privacy")]
        Privacy {},
}

/// Shared chrome around every page: header, footer, and the two
/// overlays that follow the visitor across routes.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Header {}
        main {
            class: "min-h-[60vh]",
            Outlet::<Route> {}
        }
        Footer {}
        CompareTray {}
        InquiryDrawer {}
    }
}
