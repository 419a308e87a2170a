//! Sidebar with grouped navigation links

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (href, label)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![("/", "Dashboard")],
        },
        MenuGroup {
            label: "Sales",
            items: vec![
                ("/clients", "Clients"),
                ("/invoices", "Invoices"),
                ("/quotations", "Quotations"),
            ],
        },
        MenuGroup {
            label: "Workshop HR",
            items: vec![
                ("/employees", "Employees"),
                ("/tasks", "Tasks"),
                ("/payroll", "Payroll"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__logo">"BF"</span>
                <span class="app-sidebar__title">"Brandflare Woodworks"</span>
            </div>
            <nav class="app-sidebar__nav">
                {get_menu_groups()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="menu-group">
                                <div class="menu-group__label">{group.label}</div>
                                <ul class="menu-group__items">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|(href, label)| view! {
                                            <li class="menu-item">
                                                <A href=href>{label}</A>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_link_is_unique() {
        let mut hrefs: Vec<&str> = get_menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|(href, _)| *href))
            .collect();
        let total = hrefs.len();
        hrefs.sort_unstable();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
        assert_eq!(total, 7);
    }
}
