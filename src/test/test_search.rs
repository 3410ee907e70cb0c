mod test {
    use Direction::*;
    use crate::core::*;
    use crate::search::{search, search_with_graph};
    use crate::solution::format_solution;
    use crate::test::test_util::LevelTestState;

    #[test]
    fn adjacent_objective_is_solved_in_one_move() {
        let game = LevelTestState::from_parts(1, "#H.#", "....", "..O.");
        assert_eq!(search(&game.level), Some(vec![Right]));
    }

    #[test]
    fn straight_corridor_is_solved() {
        let game = LevelTestState::from_parts(5, "#H..#", ".....", "...O.");
        let solution = search(&game.level).expect("corridor should be solvable");
        assert_eq!(format_solution(&solution), "2→");
    }

    #[test]
    fn goal_at_start_returns_empty_solution() {
        let game = LevelTestState::from_parts(3, "#H.#", "....", ".O..");
        assert_eq!(search(&game.level), Some(vec![]));
    }

    #[test]
    fn locked_door_without_key_has_no_solution() {
        let game = LevelTestState::from_parts(4, "#HL.#", ".....", "...O.");
        assert_eq!(search(&game.level), None);
    }

    #[test]
    fn budget_exhaustion_terminates_with_failure() {
        // Objective three steps away, two moves allowed.
        let game = LevelTestState::from_parts(2, "#H...#", "......", "....O.");
        assert_eq!(search(&game.level), None);
    }

    #[test]
    fn code_requirement_gates_the_objective() {
        // The code rock cannot be pushed (wall behind it), so the objective
        // alone is not enough.
        let gated = LevelTestState::from_parts(3, "#H.C#", ".....", "..O..");
        assert!(gated.level.needs_code);
        assert_eq!(search(&gated.level), None);

        let open = LevelTestState::from_parts(3, "#H..#", ".....", "..O..");
        assert!(!open.level.needs_code);
        assert_eq!(search(&open.level), Some(vec![Right]));
    }

    #[test]
    fn code_rock_level_is_solved_end_to_end() {
        let text = "
10

grid
#######
#H.U..#
#..C..#
#.....#
#######

spikes
.......
.......
.......
.s.....
.......

objectives
.......
.....O.
.......
.......
.......
";
        let game = LevelTestState::new(text);
        let solution = search(&game.level).expect("level should be solvable");

        let mut replay = LevelTestState::new(text);
        replay.assert_moves(&solution);
        assert!(replay.level.is_goal());
        assert!(replay.level.has_code);
    }

    #[test]
    fn graph_recording_does_not_change_the_outcome() {
        let text = "
6

grid
######
#H.R.#
#....#
######

spikes
......
......
..s...
......

objectives
......
......
....O.
......
";
        let game = LevelTestState::new(text);
        let plain = search(&game.level);
        let (recorded, graph, initial_id) = search_with_graph(&game.level);

        assert_eq!(plain, recorded);
        let solution = recorded.expect("demo level should be solvable");

        let mut replay = LevelTestState::new(text);
        replay.assert_moves(&solution);
        assert!(replay.level.is_goal());

        assert_eq!(graph.get_state(initial_id), Some(&game.level));
        assert!(graph.nodes.len() > 1);
        assert!(!graph.edges.is_empty());
        for edge in &graph.edges {
            assert!(graph.get_state(edge.from).is_some());
            assert!(graph.get_state(edge.to).is_some());
        }
    }

    #[test]
    fn graph_records_edges_into_already_explored_states() {
        // A dead corridor: two distinct paths reach the same exhausted
        // state, so one generated edge points at an explored node.
        let game = LevelTestState::from_grid(3, "#H..#");
        let (solution, graph, initial_id) = search_with_graph(&game.level);

        assert_eq!(solution, None);
        assert_eq!(initial_id, 0);
        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 5);
    }
}
