//! Decorative banners shown at fixed points of the adventure.
//!
//! Pure presentation: the game asks a [`Terminal`](super::terminal::Terminal)
//! to render one and never looks at the result.

/// Which picture to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Dungeon,
    Monster,
    Chest,
    Guard,
    Magician,
    GameOver,
    Smiley,
}

impl Banner {
    pub fn art(self) -> &'static str {
        match self {
            Banner::Dungeon => DUNGEON,
            Banner::Monster => MONSTER,
            Banner::Chest => CHEST,
            Banner::Guard => GUARD,
            Banner::Magician => MAGICIAN,
            Banner::GameOver => GAME_OVER,
            Banner::Smiley => SMILEY,
        }
    }
}

const MONSTER: &str = r#"                           |                     |
                        \     /               \     /
                       -= .'> =-             -= <'. =-
                          '.'.                 .'.'
                            '.'.             .'.'
                              '.'.----^----.'.'
                               /'==========='\
                           .  /  .-.     .-.  \  .
                           :'.\ '.O.') ('.O.' /.':
                           '. |               | .'
                             '|      / \      |'
                              \     (o'o)     /
                              |\             /|
                              \('._________.')/
                               '. \/|_|_|\/ .'
                                /'._______.'\"#;

const CHEST: &str = r#"                      _.--.
                  _.-'_:-'||
              _.-'_.-::::'||
         _.-:'_.-::::::'  ||
       .'`-.-:::::::'     ||
      /.'`;|:::::::'      ||_
     ||   ||::::::'     _.;._'-._
     ||   ||:::::'  _.-!oo @.!-._'-.
     ('.  ||:::::.-!()oo @!()@.-'_.|
      '.'-;|:.-'.&$@.& ()$%-'o.'-U||
        `>'-.!@%()@'@_%-'_.-o _.|'||
         ||-._'-.@.-'_.-' _.-o  |'||
         ||=[ '-._.-+U/.-'    o |'||
         || '-.]=|| |'|      o  |'||
         ||      || |'|        _| ';
         ||      || |'|    _.-'_.-'
         |'-._   || |'|_.-'_.-'
          '-._'-.|| |' `_.-'
              '-.||_/.-'"#;

const GUARD: &str = r#"                                                  ___I___
                                                 /=  |  #\
                                                /.__-| __ \
                                                |/ _\_/_ \|
                                                (( __ \__))
                                             __ ((()))))()) __
                                           ,'  |()))))(((()|# `.
                                          /    |^))()))))(^|   =\
                                         /    /^v^(())()()v^;'  .\
                                         |__.'^v^v^))))))^v^v`.__|
                                        /_ ' \______(()_____(   |
                                   _..-'   _//_____[xxx]_____\.-|
                                  /,_#\.=-' /v^v^v^v^v^v^v^v^| _|
                                  \)|)      v^v^v^v^v^v^v^v^v| _|
                                   ||       :v^v^v^v^v^v`.-' |#  \,
                                   ||       v^v^v^v`_/\__,--.|\_=_/
                                   ><       :v^v____|  \_____|_
                                ,  ||       v^      /  \       /
                               //\_||_)\    `/_..-._\   )_...__\
                              ||   \/  #|     |_='_(     |  =_(_
                              ||  _/\_  |    /     =\    /  '  =\
                               \\\/ \/ )/    |=____#|    '=....#|"#;

const GAME_OVER: &str = r#"   _____          __  __ ______    ______      ________ _____
  / ____|   /\   |  \/  |  ____|  / __ \ \    / /  ____|  __ \
 | |  __   /  \  | \  / | |__    | |  | \ \  / /| |__  | |__) |
 | | |_ | / /\ \ | |\/| |  __|   | |  | |\ \/ / |  __| |  _  /
 | |__| |/ ____ \| |  | | |____  | |__| | \  /  | |____| | \ \
  \_____/_/    \_\_|  |_|______|  \____/   \/   |______|_|  \_\\"#;

const SMILEY: &str = r#"       *****
    **       **
  **  O   O   **
 **     \_/     **
 **              **
  **   \___/   **
    **       **
       *****"#;

const MAGICIAN: &str = r#"                                                  _____
                                                 /     \
                                                /       \
                                               /_________\
                                              |         |
                                              |  () ()  |
                                               \   ^   /
                                                \_____/
                                                 |||||
                                                 |||||
                                             ____/  _  \____
                                            /    |       |   \
                                           /     |       |    \
                                          |      |       |     |
                                           \_____|_______|_____/
                                             /   _______   \
                                            /               \
                                           |    O     O     |
                                            \_______________/
                                             |||         |||
                                             |||         |||
                                             |||         |||
                                            (___)       (___)"#;

const DUNGEON: &str = r#"   _____________________________________________________________________________
 /|     -_-                                                           _-      |\
/ |_-_- _                                                     -_- _-   -_-   -| \
  |                                  _-  _--                                     |
  |                                  ,                                           |
  |      .-'  '-.        '(        .-'  '-.       '(        .-'  '-.            |
  |    . |        .      )'      . |        .    )'      . |        .          |
  |   /   |   ()    \      U      /   |   ()    \      U      /   |   ()    \   |
  |  |    |    ;     | o   T   o |    |    ;     | o   T   o |    |    ;     |  |
  |  |    |     ;    |  .  |  .  |    |     ;    |  .  |  .  |    |     ;    |  |
  |  |    |     ;    |   . | .   |    |     ;    |   . | .   |    |     ;    |  |
  |  |    |     ;    |    .|.    |    |     ;    |    .|.    |    |     ;    |  |
  |  |    |____;_____|     |     |    |____;_____|     |     |    |____;_____|  |
  |  |   /  __ ;  -  |     !     |   /     '() _-|     !     |  /     '() _-  |  |
  |  |  / __  ()     |  -      - |  /  __--    -|  -      -  | /  __--     -  |  |
  |  | /        __-- |    _- _   | /        __--|    _- _   | /        __--_  |  |
  |__|/________________|_________|/________________|_________|/________________|__|
 /                                                        _ -                      \
/   -_- _ -                  _- _---                             -_-  -_-         \"#;
