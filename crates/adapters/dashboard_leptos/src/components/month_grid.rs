//! Twelve-month activity strip.

use irrigo_domain::card::MonthCell;
use leptos::prelude::*;

#[component]
pub fn MonthGrid(months: [MonthCell; 12]) -> impl IntoView {
    view! {
        <div class="months">
            {months
                .into_iter()
                .map(|cell| {
                    view! {
                        <span class=cell.class() title=cell.month.to_string()>
                            {cell.month.short_label()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
