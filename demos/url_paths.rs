//! Simple example using url::Url path segments as sequence keys
use seqmap::SequenceMap;
use url::Url;

fn segments(url: &Url) -> Vec<String> {
    let mut key = vec![url.host_str().unwrap_or_default().to_string()];
    if let Some(parts) = url.path_segments() {
        key.extend(parts.filter(|part| !part.is_empty()).map(str::to_string));
    }
    key
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pages = SequenceMap::<String, String>::new();

    let home = Url::parse("https://example.com/")?;
    let about = Url::parse("https://example.com/about")?;
    let blog = Url::parse("https://example.com/blog")?;
    let blog_post = Url::parse("https://example.com/blog/first-post")?;

    pages.insert(segments(&home), "Home page".to_string());
    pages.insert(segments(&about), "About us".to_string());
    pages.insert(segments(&blog), "Blog index".to_string());
    pages.insert(segments(&blog_post), "First blog post".to_string());

    println!("Looking up URLs:");
    for url in [&home, &blog, &blog_post].iter() {
        println!("  {} → {:?}", url, pages.get(&segments(url)));
    }

    // Pages under /blog, found by walking every entry
    let blog_key = segments(&blog);
    println!("\nBlog section pages:");
    for (key, title) in &pages {
        if key.starts_with(&blog_key) {
            println!("  /{} → {}", key[1..].join("/"), title);
        }
    }

    // Removing the blog index keeps the post underneath it
    pages.delete(&blog_key);
    let unknown = Url::parse("https://example.com/unknown")?;
    println!("\nURL existence check:");
    println!("  {} exists: {}", blog, pages.contains_key(&segments(&blog)));
    println!("  {} exists: {}", blog_post, pages.contains_key(&segments(&blog_post)));
    println!("  {} exists: {}", unknown, pages.contains_key(&segments(&unknown)));

    Ok(())
}
