/// Parses `.{class} { width: P% }` rules into `(class, percent)` pairs.
pub fn parse_width_rules(css: &str) -> Vec<(String, f64)> {
    css.lines()
        .filter_map(|line| {
            let (selector, body) = line.split_once('{')?;
            let class = selector.trim().strip_prefix('.')?.to_string();
            let percent = body
                .trim()
                .strip_prefix("width:")?
                .trim()
                .strip_suffix('}')?
                .trim()
                .strip_suffix('%')?
                .parse()
                .ok()?;
            Some((class, percent))
        })
        .collect()
}

/// Sum of all width rules, in percent.
pub fn total_percent(css: &str) -> f64 {
    parse_width_rules(css).iter().map(|(_, p)| p).sum()
}

/// Assert that a class has a width rule with the given percentage (to two decimals)
#[macro_export]
macro_rules! assert_column_width {
    ($css:expr, $class:expr, $percent:expr) => {
        let rules = $crate::common::css_assertions::parse_width_rules(&$css);
        let found = rules.iter().find(|(class, _)| class == $class);
        match found {
            Some((_, p)) => assert!(
                (p - $percent).abs() < 0.005,
                "'{}' should be {:.2}% wide, but the rule says {:.2}%",
                $class,
                $percent,
                p
            ),
            None => panic!("No width rule for '{}' in:\n{}", $class, $css),
        }
    };
}

/// Assert that rendered markup contains a fragment
#[macro_export]
macro_rules! assert_html_contains {
    ($html:expr, $fragment:expr) => {
        assert!(
            $html.contains($fragment),
            "HTML should contain '{}', but was:\n{}",
            $fragment,
            $html
        );
    };
}
