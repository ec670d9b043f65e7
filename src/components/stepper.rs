//! Question Stepper Component

use leptos::prelude::*;

/// One step per question; answered steps are marked done
#[component]
pub fn Stepper(
    count: usize,
    #[prop(into)] active: Signal<usize>,
    #[prop(into)] answered: Signal<Vec<bool>>,
) -> impl IntoView {
    view! {
        <ol class="stepper">
            {(0..count)
                .map(|index| {
                    let step_class = move || {
                        let mut c = String::from("step");
                        if active.get() == index { c.push_str(" active"); }
                        if answered.with(|a| a.get(index).copied().unwrap_or(false)) {
                            c.push_str(" done");
                        }
                        c
                    };
                    view! {
                        <li class=step_class>{format!("Question {}", index + 1)}</li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
