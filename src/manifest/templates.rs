//! Source templates for the generated game.
//!
//! The bootstrap page loads the runtime and `game.js`; `game.js` embeds the
//! scene as a literal and wires keyboard input to arcade physics.

use super::ManifestOptions;

/// Placeholder in [`GAME_JS`] replaced by the canonical scene JSON.
const SCENE_PLACEHOLDER: &str = "/*@SCENE@*/null";

/// Escape text for HTML element content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the bootstrap page.
pub fn index_html(options: &ManifestOptions, game_file: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    html, body {{ margin: 0; height: 100%; background: #111; overflow: hidden; }}
    #game {{ width: 100%; height: 100%; outline: none; }}
  </style>
</head>
<body>
  <!-- Click the game once to give it keyboard focus; held keys then repeat. -->
  <div id="game" tabindex="0"></div>
  <script src="{runtime}"></script>
  <script src="{game}"></script>
  <script>
    // Arrow keys and space must not scroll the host page.
    window.addEventListener("keydown", function (e) {{
      if ([32, 37, 38, 39, 40].indexOf(e.keyCode) >= 0) {{ e.preventDefault(); }}
    }}, {{ passive: false }});
    document.getElementById("game").focus();
    // The host (preview frame or editor) can restart the level.
    window.addEventListener("message", function (e) {{
      var data = e.data;
      if (data === "reset" || (data && data.type === "reset")) {{
        if (window.pixelplay) {{ window.pixelplay.reset(); }}
      }}
    }});
  </script>
</body>
</html>
"#,
        title = escape_html(&options.title),
        runtime = escape_html(&options.runtime_url),
        game = escape_html(game_file),
    )
}

/// Render the game program with the scene embedded as a constant.
pub fn game_js(scene_json: &str) -> String {
    GAME_JS.replacen(SCENE_PLACEHOLDER, scene_json, 1)
}

const GAME_JS: &str = r##"// Generated by pixelplay. Edits are overwritten on the next build.
"use strict";

const SCENE = /*@SCENE@*/null;

(function () {
  const world = SCENE.world;
  const controls = SCENE.controls;
  // A scene without characters still gets a controllable block.
  const hero = SCENE.characters[0] || {
    name: "Hero",
    collider: { w: 48, h: 64, offsetX: 0, offsetY: 0 },
    abilities: { moveSpeed: 180, jumpVelocity: 420 },
    spawn: { x: 100, y: world.height - 200 },
  };
  const TARGET_COLORS = { coin: 0xffd54f, goal: 0x66bb6a, hazard: 0xef5350, enemy: 0x8e24aa };
  let game = null;

  function keyCode(name) {
    const code = Phaser.Input.Keyboard.KeyCodes[String(name || "").toUpperCase()];
    return code === undefined ? null : code;
  }

  class Level extends Phaser.Scene {
    constructor() {
      super("level");
    }

    preload() {
      // Images are best effort: a failed load leaves a colored rectangle.
      this.load.on("loaderror", function () {});
      if (SCENE.background && SCENE.background.imageUrl) {
        this.load.image("background", SCENE.background.imageUrl);
      }
      if (hero.imageUrl) {
        this.load.image("hero", hero.imageUrl);
      }
    }

    create() {
      this.physics.world.setBounds(0, 0, world.width, world.height);
      this.cameras.main.setBounds(0, 0, world.width, world.height);

      if (this.textures.exists("background")) {
        const bg = this.add.image(0, 0, "background").setOrigin(0, 0).setScrollFactor(0);
        if (SCENE.background.fit === "stretch") {
          bg.setDisplaySize(world.width, world.height);
        } else {
          bg.setScale(Math.max(world.width / bg.width, world.height / bg.height));
        }
      } else {
        this.add.rectangle(0, 0, world.width, world.height, 0x87ceeb).setOrigin(0, 0);
      }

      this.platforms = this.physics.add.staticGroup();
      SCENE.platforms.forEach((p) => {
        this.platforms.add(this.add.rectangle(p.x + p.w / 2, p.y + p.h / 2, p.w, p.h, 0x5d8a3c));
      });

      this.targets = this.physics.add.staticGroup();
      SCENE.targets.forEach((t) => {
        const color = TARGET_COLORS[t.type] || 0xffffff;
        const rect = this.add.rectangle(t.x + t.w / 2, t.y + t.h / 2, t.w, t.h, color);
        rect.setData("type", t.type);
        this.targets.add(rect);
      });

      const c = hero.collider;
      if (this.textures.exists("hero")) {
        this.player = this.physics.add.sprite(hero.spawn.x, hero.spawn.y, "hero");
        this.player.body.setSize(c.w, c.h, false);
        this.player.body.setOffset(c.offsetX, c.offsetY);
      } else {
        this.player = this.add.rectangle(hero.spawn.x, hero.spawn.y, c.w, c.h, 0xff7043);
        this.physics.add.existing(this.player);
      }
      this.player.body.setCollideWorldBounds(true);
      this.facing = 1;

      this.physics.add.collider(this.player, this.platforms);
      this.physics.add.overlap(this.player, this.targets, (_player, target) => {
        target.destroy();
        this.toast("Collected!");
      });

      this.projectiles = this.physics.add.group({ allowGravity: false });
      this.physics.add.overlap(this.projectiles, this.targets, (shot, target) => {
        if (target.getData("type") === "enemy") {
          target.destroy();
          shot.destroy();
        }
      });
      this.lastShot = -Infinity;

      this.cameras.main.startFollow(this.player);

      this.cursors = this.input.keyboard.createCursorKeys();
      this.jumpKey = this.input.keyboard.addKey(Phaser.Input.Keyboard.KeyCodes.SPACE);
      const shootCode = keyCode(controls.shootKey);
      this.shootKey = shootCode === null ? null : this.input.keyboard.addKey(shootCode);
      const resetCode = keyCode(controls.resetKey);
      if (resetCode !== null) {
        this.input.keyboard.on("keydown", (event) => {
          if (event.keyCode === resetCode) {
            this.scene.restart();
          }
        });
      }
    }

    toast(message) {
      const text = this.add
        .text(this.cameras.main.width / 2, 24, message, { fontFamily: "monospace", fontSize: "20px", color: "#ffffff" })
        .setOrigin(0.5, 0)
        .setScrollFactor(0);
      this.time.delayedCall(1200, () => text.destroy());
    }

    shoot(time, shoot) {
      if (time - this.lastShot < shoot.cooldownMs) {
        return;
      }
      this.lastShot = time;
      const shot = this.add.rectangle(this.player.x + this.facing * 16, this.player.y, 10, 4, 0xffffff);
      this.projectiles.add(shot);
      shot.body.setVelocityX(this.facing * shoot.projectileSpeed);
      this.time.delayedCall(2000, () => shot.destroy());
    }

    update(time) {
      // Abilities are read every frame so the values in SCENE drive movement.
      const abilities = hero.abilities;
      const body = this.player.body;

      let vx = 0;
      if (controls.arrows) {
        if (this.cursors.left.isDown) {
          vx -= abilities.moveSpeed;
        }
        if (this.cursors.right.isDown) {
          vx += abilities.moveSpeed;
        }
      }
      if (vx !== 0) {
        this.facing = vx > 0 ? 1 : -1;
      }
      body.setVelocityX(vx);

      const onGround = body.blocked.down || body.touching.down;
      const wantsJump = (controls.spaceJump && this.jumpKey.isDown) || this.cursors.up.isDown;
      if (wantsJump && onGround && abilities.jump !== false) {
        body.setVelocityY(-abilities.jumpVelocity);
      }

      if (abilities.shoot && this.shootKey && this.shootKey.isDown) {
        this.shoot(time, abilities.shoot);
      }
    }
  }

  function start() {
    game = new Phaser.Game({
      type: Phaser.AUTO,
      parent: "game",
      width: world.width,
      height: world.height,
      backgroundColor: "#000000",
      pixelArt: true,
      scale: { mode: Phaser.Scale.FIT, autoCenter: Phaser.Scale.CENTER_BOTH },
      physics: { default: "arcade", arcade: { gravity: { y: world.gravity }, debug: false } },
      scene: [Level],
    });
  }

  window.pixelplay = {
    scene: SCENE,
    reset: function () {
      if (game) {
        game.scene.getScene("level").scene.restart();
      }
    },
  };

  start();
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_js_embeds_scene_once() {
        let js = game_js("{\"world\": {}}");
        assert!(js.contains("const SCENE = {\"world\": {}};"));
        assert!(!js.contains(SCENE_PLACEHOLDER));
    }

    #[test]
    fn test_game_js_keeps_hex_color_literals() {
        let js = game_js("{}");
        assert!(js.contains(r##"backgroundColor: "#000000","##));
        assert!(js.contains(r##"color: "#ffffff" }"##));
        assert!(js.trim_end().ends_with("})();"));
    }

    #[test]
    fn test_index_html_escapes_options() {
        let options = ManifestOptions {
            runtime_url: "https://cdn.example.com/phaser.js?a=1&b=2".to_string(),
            title: "<My Game>".to_string(),
        };
        let html = index_html(&options, "game.js");
        assert!(html.contains("<title>&lt;My Game&gt;</title>"));
        assert!(html.contains("phaser.js?a=1&amp;b=2"));
        assert!(html.contains(r#"<script src="game.js"></script>"#));
        assert!(html.contains("\"reset\""));
    }
}
