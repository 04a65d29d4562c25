//! Templates for the merchandise order confirmation and admin alert.
//!
//! Both messages embed the same order summary table so the customer and
//! the fulfilment team are always looking at identical details.

use super::escape_html;

/// Everything the order emails need to render. Built by the order intake
/// handler after the submission has been parsed and assigned an id.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order_id: String,
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub address: String,
    pub product: String,
    pub size: String,
    pub quantity: String,
    pub delivery_method: String,
    pub ieee_member: bool,
    pub ieee_member_id: String,
    pub payment_slip_url: String,
}

pub fn customer_subject(order_id: &str) -> String {
    format!("Your IEEE YPSL order {order_id} has been received")
}

pub fn admin_subject(order_id: &str) -> String {
    format!("New merch order {order_id}")
}

fn summary_row(label: &str, value: &str) -> String {
    format!(
        "<tr><td style=\"padding:4px 12px 4px 0;font-weight:bold\">{}</td>\
         <td style=\"padding:4px 0\">{}</td></tr>",
        escape_html(label),
        escape_html(value)
    )
}

/// The order summary table shared by both messages. Includes the payment
/// slip link when the upload produced one, so the customer and the
/// fulfilment team can both check the same receipt.
fn summary_table(order: &OrderDetails) -> String {
    let membership = if order.ieee_member {
        format!("Yes ({})", order.ieee_member_id)
    } else {
        "No".to_string()
    };
    let mut rows = vec![
        summary_row("Order ID", &order.order_id),
        summary_row("Placed at", &order.timestamp),
        summary_row("Name", &order.full_name),
        summary_row("Email", &order.email),
        summary_row("WhatsApp", &order.whatsapp),
        summary_row("Product", &order.product),
        summary_row("Size", &order.size),
        summary_row("Quantity", &order.quantity),
        summary_row("Delivery", &order.delivery_method),
        summary_row("Address", &order.address),
        summary_row("IEEE member", &membership),
    ];
    if order.payment_slip_url != "N/A" {
        rows.push(format!(
            "<tr><td style=\"padding:4px 12px 4px 0;font-weight:bold\">Payment slip</td>\
             <td style=\"padding:4px 0\"><a href=\"{url}\">View Receipt</a></td></tr>",
            url = escape_html(&order.payment_slip_url)
        ));
    }
    let rows = rows.join("\n");
    format!("<table cellspacing=\"0\" cellpadding=\"0\">\n{rows}\n</table>")
}

/// Confirmation sent to the customer's address.
pub fn customer_confirmation_html(order: &OrderDetails) -> String {
    format!(
        "<div style=\"font-family:Arial,sans-serif;max-width:600px\">\
         <h2>Thank you for your order!</h2>\
         <p>Hi {name},</p>\
         <p>We have received your order <strong>{order_id}</strong> and our \
         team will verify your payment shortly. You will be contacted on \
         WhatsApp once the order is confirmed.</p>\
         {summary}\
         <p>If any of the details above are wrong, reply to this email \
         quoting your order ID.</p>\
         <p>IEEE Young Professionals Sri Lanka</p>\
         </div>",
        name = escape_html(&order.full_name),
        order_id = escape_html(&order.order_id),
        summary = summary_table(order),
    )
}

/// Alert sent to the fulfilment inbox. The slip link lives in the shared
/// summary table; this copy additionally calls out an upload failure so a
/// missing receipt gets chased before the order is confirmed.
pub fn admin_alert_html(order: &OrderDetails) -> String {
    let slip = if order.payment_slip_url == "N/A" {
        "<p><strong>Payment slip:</strong> upload failed, check the \
         submission log.</p>"
    } else {
        ""
    };
    format!(
        "<div style=\"font-family:Arial,sans-serif;max-width:600px\">\
         <h2>New merchandise order</h2>\
         {summary}\
         {slip}\
         <p>Verify the payment and move the order to confirmed in the \
         order sheet.</p>\
         </div>",
        summary = summary_table(order),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> OrderDetails {
        OrderDetails {
            order_id: "YPSL-ORD-20260829-4821".to_string(),
            timestamp: "8/29/2026, 2:15:09 PM".to_string(),
            full_name: "Nimal Perera".to_string(),
            email: "nimal@example.com".to_string(),
            whatsapp: "+94771234567".to_string(),
            address: "12 Galle Road, Colombo 03".to_string(),
            product: "YPSL Hoodie".to_string(),
            size: "L".to_string(),
            quantity: "2".to_string(),
            delivery_method: "delivery".to_string(),
            ieee_member: true,
            ieee_member_id: "98765432".to_string(),
            payment_slip_url: "http://localhost:3000/media/YPSL-ORD-20260829-4821.jpg"
                .to_string(),
        }
    }

    #[test]
    fn customer_email_carries_order_summary() {
        let html = customer_confirmation_html(&sample_order());
        assert!(html.contains("YPSL-ORD-20260829-4821"));
        assert!(html.contains("Nimal Perera"));
        assert!(html.contains("YPSL Hoodie"));
        assert!(html.contains("Yes (98765432)"));
        assert!(html.contains("/media/YPSL-ORD-20260829-4821.jpg"));
        assert!(html.contains("View Receipt"));
    }

    #[test]
    fn admin_email_links_payment_slip() {
        let html = admin_alert_html(&sample_order());
        assert!(html.contains("/media/YPSL-ORD-20260829-4821.jpg"));
        assert!(html.contains("New merchandise order"));
        assert!(!html.contains("upload failed"));
    }

    #[test]
    fn admin_email_flags_missing_slip() {
        let mut order = sample_order();
        order.payment_slip_url = "N/A".to_string();
        let html = admin_alert_html(&order);
        assert!(html.contains("upload failed"));
        assert!(!html.contains("View Receipt"));
    }

    #[test]
    fn missing_slip_row_is_omitted_from_customer_copy() {
        let mut order = sample_order();
        order.payment_slip_url = "N/A".to_string();
        let html = customer_confirmation_html(&order);
        assert!(!html.contains("Payment slip"));
        assert!(!html.contains("N/A"));
    }

    #[test]
    fn non_member_renders_without_member_id() {
        let mut order = sample_order();
        order.ieee_member = false;
        let html = customer_confirmation_html(&order);
        assert!(html.contains("<td style=\"padding:4px 0\">No</td>"));
        assert!(!html.contains("98765432"));
    }

    #[test]
    fn customer_name_is_escaped() {
        let mut order = sample_order();
        order.full_name = "<b>Nimal</b>".to_string();
        let html = customer_confirmation_html(&order);
        assert!(html.contains("&lt;b&gt;Nimal&lt;/b&gt;"));
    }

    #[test]
    fn subjects_reference_the_order_id() {
        assert_eq!(
            customer_subject("YPSL-ORD-20260829-4821"),
            "Your IEEE YPSL order YPSL-ORD-20260829-4821 has been received"
        );
        assert_eq!(
            admin_subject("YPSL-ORD-20260829-4821"),
            "New merch order YPSL-ORD-20260829-4821"
        );
    }
}
