use yew::prelude::*;

use crate::models::order::{Order, OrderField};
use crate::state::view_state::{TablePage, ViewState};
use crate::utils::comparator::SortDirection;
use crate::utils::pagination::PageSize;

#[derive(Properties, PartialEq, Clone)]
pub struct OrdersTableProps {
    pub page: TablePage,
    pub view: ViewState,
    pub on_sort: Callback<OrderField>,
    pub on_row_click: Callback<Order>,
    pub on_page_size: Callback<PageSize>,
    pub on_next_page: Callback<()>,
    pub on_previous_page: Callback<()>,
}

#[function_component(OrdersTable)]
pub fn orders_table(props: &OrdersTableProps) -> Html {
    let view = props.view;

    let header = OrderField::ALL.iter().map(|&field| {
        let active = view.sort_key == field;
        let on_sort = props.on_sort.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_sort.emit(field));
        let arrow = match (active, view.sort_direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => " ▲",
            (true, SortDirection::Desc) => " ▼",
        };
        let aria_sort = match (active, view.sort_direction) {
            (false, _) => "none",
            (true, SortDirection::Asc) => "ascending",
            (true, SortDirection::Desc) => "descending",
        };
        html! {
            <th class={classes!("sortable", active.then_some("active"))} aria-sort={aria_sort}>
                <button type="button" class="sort-label" {onclick}>
                    {field.label()}{arrow}
                </button>
            </th>
        }
    });

    let rows = props.page.rows.iter().map(|order| {
        let on_row_click = props.on_row_click.clone();
        let row = order.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_row_click.emit(row.clone()));
        html! {
            <tr class="order-row" key={order.id.to_string()} {onclick}>
                <th scope="row">{order.id.to_string()}</th>
                <td>{&order.username}</td>
                <td>{&order.status}</td>
                <td>{&order.created_at}</td>
            </tr>
        }
    });

    let filler = if props.page.empty_rows > 0 {
        let height = format!("height: {}px", 53 * props.page.empty_rows);
        html! { <tr class="filler-row" style={height}><td colspan="4"></td></tr> }
    } else {
        html! {}
    };

    let on_page_size = {
        let cb = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                match select.value().parse::<usize>().ok().and_then(|v| PageSize::try_from(v).ok()) {
                    Some(size) => cb.emit(size),
                    None => log::warn!("⚠️ Unsupported page size {}", select.value()),
                }
            }
        })
    };
    let previous = {
        let cb = props.on_previous_page.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let next = {
        let cb = props.on_next_page.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let page_size = view.page_size.rows();
    let first = (view.page_index * page_size + 1).min(props.page.total_rows);
    let last = ((view.page_index + 1) * page_size).min(props.page.total_rows);
    let is_last_page = view.page_index + 1 >= props.page.page_count;

    html! {
        <div class="orders-table">
            <div class="table-toolbar">
                <h2 id="tableTitle">{"Orders"}</h2>
            </div>
            <table aria-labelledby="tableTitle">
                <thead><tr>{ for header }</tr></thead>
                <tbody>
                    { for rows }
                    { filler }
                </tbody>
            </table>
            <div class="table-pagination">
                <label>
                    {"Rows per page: "}
                    <select onchange={on_page_size}>
                        { for PageSize::ALL.iter().map(|size| html! {
                            <option value={size.rows().to_string()} selected={*size == view.page_size}>
                                {size.rows()}
                            </option>
                        }) }
                    </select>
                </label>
                <span class="page-range">
                    {format!("{}–{} of {}", first, last, props.page.total_rows)}
                </span>
                <button type="button" onclick={previous} disabled={view.page_index == 0}>{"‹"}</button>
                <button type="button" onclick={next} disabled={is_last_page}>{"›"}</button>
            </div>
        </div>
    }
}
