use rawurl::{Url, decode, encode};

fn main() {
    // Split a URL the way it appears in an href attribute
    let mut url = Url::parse("HTTPS://user@example.com:8080/caf%C3%A9?q=a%20b#top")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // https://user@example.com:8080/caf%C3%A9?q=a%20b#top
    println!("Scheme: {}", url.scheme); // https
    println!("Auth: {}", url.auth); // user
    println!("Host: {}", url.host); // example.com
    println!("Port: {}", url.port); // 8080
    println!("Path: {}", decode(&url.path)); // /café
    println!("Query: {}", url.raw_query); // q=a%20b
    println!("Fragment: {}", url.fragment); // top

    // Rewrite the host and serialize again
    url.host = String::from("mirror.example.org");
    url.port.clear();
    println!("Rewritten: {}", url.serialize()); // https://user@mirror.example.org/caf%C3%A9?q=a%20b#top

    // Encoding leaves existing escapes alone
    println!("Encoded: {}", encode("/über uns/%7e")); // /%C3%BCber%20uns/%7E
}
