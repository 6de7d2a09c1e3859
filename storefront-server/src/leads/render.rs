//! Notification rendering
//!
//! Produces the plain-text Russian message managers receive for each
//! lead. Order notifications carry the full price breakdown from the
//! payload; the catalog is never consulted here.

use shared::lead::{LeadRequest, OrderPayload, phone::format_phone};

use super::notify::Notification;

/// Render `155000` as `155 000 ₽` (non-breaking group separators)
pub fn format_rubles(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}\u{a0}₽", sign, grouped)
}

/// Render a lead into its notification
pub fn render(lead: &LeadRequest) -> Notification {
    match lead {
        LeadRequest::Callback { name, phone } => Notification {
            kind: "callback".to_string(),
            subject: "Новый запрос на обратный звонок".to_string(),
            body: format!(
                "Имя: {}\nТелефон: {}\n\nПожалуйста, свяжитесь с клиентом как можно скорее.",
                name,
                format_phone(phone)
            ),
        },
        LeadRequest::Promo {
            name,
            phone,
            product_name,
            product_price,
        } => {
            let mut body = format!("Имя: {}\nТелефон: {}\n", name, format_phone(phone));
            if let Some(product_name) = product_name {
                body.push_str(&format!("Товар: {}\n", product_name));
            }
            if let Some(price) = product_price {
                body.push_str(&format!("Цена: {}\n", format_rubles(*price)));
            }
            body.push_str("\nПожалуйста, свяжитесь с клиентом как можно скорее.");
            Notification {
                kind: "promo".to_string(),
                subject: "Новая заявка по акции".to_string(),
                body,
            }
        }
        LeadRequest::Order(payload) => Notification {
            kind: "order".to_string(),
            subject: format!("Новый заказ: {}", payload.product_name),
            body: render_order_body(payload),
        },
    }
}

fn render_order_body(payload: &OrderPayload) -> String {
    let mut body = format!("Товар: {}\n\nКонфигурация:\n", payload.product_name);
    if !payload.configuration.wheels.is_empty() {
        body.push_str(&format!("  Колёса: {}\n", payload.configuration.wheels));
    }
    if !payload.configuration.hub.is_empty() {
        body.push_str(&format!("  Ступица: {}\n", payload.configuration.hub));
    }
    if let Some(tent) = &payload.configuration.tent {
        body.push_str(&format!("  Тент: {}\n", tent));
    }
    if !payload.accessories_prices.is_empty() {
        body.push_str("  Комплектующие:\n");
        for accessory in &payload.accessories_prices {
            body.push_str(&format!(
                "    {} — {}\n",
                accessory.name,
                format_rubles(accessory.price)
            ));
        }
    }

    body.push_str(&format!("\nБазовая цена: {}\n", format_rubles(payload.base_price)));
    if let Some(old_price) = payload.old_price {
        body.push_str(&format!("Старая цена: {}\n", format_rubles(old_price)));
    }
    if let (Some(tent_name), Some(tent_price)) = (&payload.tent_name, payload.tent_price) {
        body.push_str(&format!(
            "Тент: {} ({})\n",
            tent_name,
            format_rubles(tent_price)
        ));
    }
    body.push_str(&format!(
        "Итоговая цена: {}\n\nКонтактные данные:\nИмя: {}\nТелефон: {}",
        format_rubles(payload.total_price),
        payload.name,
        format_phone(&payload.phone)
    ));
    body
}
