#[cfg(test)]
mod rendering_properties {
    use crate::{render_to_string, InlineTemplates, OutlineNode, RenderConfig};

    const FRONT: &str = "\\documentclass{beamer}\n\\begin{document}\n";
    const BACK: &str = "\\end{document}\n";

    const ALL_CONFIGS: [RenderConfig; 4] = [
        RenderConfig {
            two_level_sections: false,
            two_column_frames: false,
        },
        RenderConfig {
            two_level_sections: false,
            two_column_frames: true,
        },
        RenderConfig {
            two_level_sections: true,
            two_column_frames: false,
        },
        RenderConfig {
            two_level_sections: true,
            two_column_frames: true,
        },
    ];

    fn render(root: &OutlineNode, config: RenderConfig) -> String {
        render_to_string(root, config, InlineTemplates::new(FRONT, BACK)).unwrap()
    }

    // A lecture with a mix of empty and non-empty notes at every depth.
    fn lecture() -> OutlineNode {
        let mut root = OutlineNode::root();

        let basics = root.add_child("Basics", "What\nWhy\nHow\n");
        let types = basics.add_child("Types", "");
        types.add_child("Integers", "i32\nu64\n");
        types.add_child("Strings", "");
        basics.add_child("Ownership", "Move\n");

        let advanced = root.add_child("Advanced", "");
        advanced
            .add_child("Traits", "Bounds\n")
            .add_child("Objects", "dyn\nvtable\n")
            .add_child("Layout", "fat pointers\n");

        root.add_child("Summary", "Done\n");
        root
    }

    #[test]
    fn test_frame_count_matches_nodes_with_notes() {
        let root = lecture();
        let expected = root
            .iter()
            .filter(|node| node.layer >= 1 && node.has_note())
            .count();

        for config in ALL_CONFIGS {
            let text = render(&root, config);
            assert_eq!(text.matches("\\begin{frame}").count(), expected, "{:?}", config);
            assert_eq!(text.matches("\\end{frame}").count(), expected, "{:?}", config);
        }
    }

    #[test]
    fn test_single_preamble_and_postamble_at_the_edges() {
        for config in ALL_CONFIGS {
            let text = render(&lecture(), config);
            assert!(text.starts_with(FRONT));
            assert!(text.ends_with(BACK));
            assert_eq!(text.matches("\\begin{document}").count(), 1);
            assert_eq!(text.matches("\\end{document}").count(), 1);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let root = lecture();
        for config in ALL_CONFIGS {
            assert_eq!(render(&root, config), render(&root, config));
        }
    }

    #[test]
    fn test_bullet_count_is_segments_minus_one() {
        let note = "one\ntwo\nthree\nleftover";
        let root = OutlineNode::root().with_child(OutlineNode::new("Only", note, 1));

        for config in ALL_CONFIGS {
            let text = render(&root, config);
            assert_eq!(
                text.matches("\\item ").count(),
                note.split('\n').count() - 1
            );
            assert!(!text.contains("leftover"));
        }
    }

    #[test]
    fn test_reserved_column_is_always_empty() {
        let root = lecture();
        let text = render(
            &root,
            RenderConfig {
                two_level_sections: true,
                two_column_frames: true,
            },
        );

        let reserved = "        \\begin{column}{0.3\\textwidth}\n            \n        \\end{column}\n";
        assert_eq!(
            text.matches(reserved).count(),
            text.matches("\\begin{frame}").count()
        );
    }

    #[test]
    fn test_section_markers_follow_layers() {
        let root = lecture();

        let flat = render(&root, ALL_CONFIGS[0]);
        assert_eq!(flat.matches("\\section{").count(), 3);
        assert_eq!(flat.matches("\\subsection{").count(), 0);

        let nested = render(&root, ALL_CONFIGS[2]);
        assert_eq!(nested.matches("\\section{").count(), 3);
        assert_eq!(nested.matches("\\subsection{").count(), 3);
        assert!(nested.contains("\\subsection{Types}\n\n"));
        assert!(!nested.contains("\\subsection{Integers}"));
    }

    #[test]
    fn test_pre_order_output() {
        let text = render(&lecture(), ALL_CONFIGS[2]);
        let order = [
            "\\section{Basics}",
            "\\begin{frame}{Basics}",
            "\\subsection{Types}",
            "\\begin{frame}{Integers}",
            "\\subsection{Ownership}",
            "\\begin{frame}{Ownership}",
            "\\section{Advanced}",
            "\\subsection{Traits}",
            "\\begin{frame}{Traits}",
            "\\begin{frame}{Objects}",
            "\\begin{frame}{Layout}",
            "\\section{Summary}",
            "\\begin{frame}{Summary}",
        ];

        let positions: Vec<usize> = order
            .iter()
            .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
