/// Defines a function, that accepts a list of path segments and returns a URL
macro_rules! def {
    ($vis:vis $ident:ident, $url:literal) => {
        $vis fn $ident<T: AsRef<str>>(segments: impl IntoIterator<Item = T>) -> ::url::Url {
            let mut url: ::url::Url = $url.parse().unwrap();
            url.path_segments_mut().unwrap().pop_if_empty().extend(segments);
            url
        }
    };
}

pub(crate) use def;
