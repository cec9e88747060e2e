//! Browse pages
//!
//! Two small pages rendered with plain string building. All user-supplied
//! text goes through [`escape`] before interpolation.

use crate::db::models::Cafe;

/// Escape text for interpolation into HTML element content or attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

/// Index page: every cafe, one table row each, linked to its detail page
pub fn render_index(cafes: &[Cafe]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Cafes</h1>\n");

    if cafes.is_empty() {
        body.push_str("<p>No cafes yet.</p>\n");
        return shell("Cafes", &body);
    }

    body.push_str("<table>\n<thead>\n<tr><th>Name</th><th>Location</th><th>Seats</th><th>Coffee</th></tr>\n</thead>\n<tbody>\n");
    for cafe in cafes {
        body.push_str(&format!(
            "<tr><td><a href=\"/search/{id}\">{name}</a></td><td>{location}</td><td>{seats}</td><td>{price}</td></tr>\n",
            id = cafe.id,
            name = escape(&cafe.name),
            location = escape(&cafe.location),
            seats = escape(&cafe.seats),
            price = escape(cafe.coffee_price.as_deref().unwrap_or("-")),
        ));
    }
    body.push_str("</tbody>\n</table>\n");

    shell("Cafes", &body)
}

/// Detail page for a single cafe
pub fn render_detail(cafe: &Cafe) -> String {
    let body = format!(
        "<h1>{name}</h1>\n\
         <img src=\"{img_url}\" alt=\"{name}\">\n\
         <dl>\n\
         <dt>Location</dt><dd>{location}</dd>\n\
         <dt>Map</dt><dd><a href=\"{map_url}\">{map_url}</a></dd>\n\
         <dt>Seats</dt><dd>{seats}</dd>\n\
         <dt>Coffee price</dt><dd>{price}</dd>\n\
         <dt>Toilet</dt><dd>{toilet}</dd>\n\
         <dt>Wifi</dt><dd>{wifi}</dd>\n\
         <dt>Sockets</dt><dd>{sockets}</dd>\n\
         <dt>Takes calls</dt><dd>{calls}</dd>\n\
         </dl>\n\
         <p><a href=\"/\">Back to all cafes</a></p>\n",
        name = escape(&cafe.name),
        img_url = escape(&cafe.img_url),
        map_url = escape(&cafe.map_url),
        location = escape(&cafe.location),
        seats = escape(&cafe.seats),
        price = escape(cafe.coffee_price.as_deref().unwrap_or("-")),
        toilet = yes_no(cafe.has_toilet),
        wifi = yes_no(cafe.has_wifi),
        sockets = yes_no(cafe.has_sockets),
        calls = yes_no(cafe.can_take_calls),
    );

    shell(&cafe.name, &body)
}
