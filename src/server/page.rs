use crate::server::form::PriceForm;
use crate::state::{OptionKind, Quote};

/// What the single pricing page shows: echoed inputs, and either a price or a message.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub form: Option<&'a PriceForm>,
    pub quote: Option<Quote>,
    pub message: Option<String>,
}

pub fn render(view: &PageView<'_>) -> String {
    let empty = PriceForm::default();
    let form = view.form.unwrap_or(&empty);
    let kind = form.kind();

    let mut html = String::with_capacity(2048);
    html.push_str(concat!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Black-Scholes Option Pricer</title>\n",
        "<link rel=\"stylesheet\" href=\"/static/style.css\">\n",
        "</head>\n<body>\n<h1>Black-Scholes Option Pricer</h1>\n",
    ));

    if let Some(msg) = &view.message {
        html.push_str(&format!("<p class=\"flash\">{}</p>\n", escape(msg)));
    }

    html.push_str("<form method=\"post\" action=\"/\">\n");
    input(&mut html, "S", "Stock price (S)", form.spot.as_deref());
    input(&mut html, "K", "Strike price (K)", form.strike.as_deref());
    input(&mut html, "T", "Time to expiry in years (T)", form.ttl_years.as_deref());
    input(&mut html, "r", "Risk-free rate (r)", form.rate.as_deref());
    input(&mut html, "sigma", "Volatility (sigma)", form.sigma.as_deref());

    html.push_str("<label for=\"option_type\">Option type</label>\n<select id=\"option_type\" name=\"option_type\">\n");
    for k in [OptionKind::Call, OptionKind::Put] {
        let selected = if k == kind { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{k}\"{selected}>{k}</option>\n"));
    }
    html.push_str("</select>\n<button type=\"submit\">Calculate</button>\n</form>\n");

    if let Some(q) = view.quote {
        html.push_str(&format!(
            "<p class=\"price\">The {} option price is: <strong>{:.4}</strong></p>\n",
            q.kind, q.price
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn input(html: &mut String, name: &str, label: &str, value: Option<&str>) {
    html.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\" required>\n",
        escape(value.unwrap_or_default())
    ));
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
